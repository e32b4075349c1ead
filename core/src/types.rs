/// Index into a session's card sequence, in post-shuffle order.
pub type Position = usize;

/// Identifier of a card, unique within a session.
pub type CardId = u16;

/// Count type used for pairs, tries and matches.
pub type Count = u16;

/// Opaque pairing key, rendered by the presentation layer as an icon name.
pub type Symbol = &'static str;

/// Grid shape `(cols, rows)`.
pub type Shape = (u8, u8);

pub const fn area((cols, rows): Shape) -> Count {
    let cols = cols as Count;
    let rows = rows as Count;
    cols.saturating_mul(rows)
}
