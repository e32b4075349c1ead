use memora_core::Difficulty;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MenuProps {
    pub selected: Difficulty,
    pub on_start: Callback<Difficulty>,
    pub on_help: Callback<()>,
}

/// Start screen: one button per difficulty tier.
#[function_component]
pub(crate) fn MenuView(props: &MenuProps) -> Html {
    let on_help = props.on_help.reform(|_: MouseEvent| ());

    html! {
        <section class="menu">
            <h1>{"memora"}</h1>
            <p>{"Find every pair in as few tries as you can."}</p>
            <ul class="tiers">
                {
                    for Difficulty::ALL.into_iter().map(|difficulty| {
                        let (cols, rows) = difficulty.shape();
                        let class = classes!(
                            "tier",
                            (difficulty == props.selected).then_some("selected")
                        );
                        let onclick = props.on_start.reform(move |_: MouseEvent| difficulty);
                        html! {
                            <li>
                                <button {class} {onclick}>
                                    <strong>{difficulty.name()}</strong>
                                    <small>{format!("{}×{} · {} pairs", cols, rows, difficulty.pair_count())}</small>
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
            <button class="help" onclick={on_help}>{"How to play"}</button>
        </section>
    }
}
