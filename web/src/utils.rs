use gloo::storage::{LocalStorage, Storage};
use serde::{Serialize, de::DeserializeOwned};
use yew::prelude::*;

/// Local storage slot a type is saved under.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            log::debug!("no stored {}: {}", T::KEY, err);
            T::default()
        })
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("failed to save {}: {}", T::KEY, err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children straight under `<body>` so dialogs overlay the whole page.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    create_portal(props.children.clone(), gloo::utils::body().into())
}

/// Seed for a new board when none was forced through the url.
pub(crate) fn js_random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    for byte in &mut bytes {
        *byte = (js_sys::Math::random() * 256.) as u8;
    }
    u64::from_le_bytes(bytes)
}

pub(crate) fn format_matches(found: u16, total: u16) -> String {
    format!("{}/{}", found, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_counter_shows_found_over_total() {
        assert_eq!(format_matches(0, 8), "0/8");
        assert_eq!(format_matches(12, 18), "12/18");
    }
}
