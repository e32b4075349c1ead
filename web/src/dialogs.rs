use memora_core::format_elapsed;
use std::time::Duration;
use yew::prelude::*;

use crate::utils::Modal;

#[derive(Properties, PartialEq)]
pub(crate) struct HelpProps {
    pub on_close: Callback<()>,
}

#[function_component]
pub(crate) fn HelpDialog(props: &HelpProps) -> Html {
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal>
            <dialog id="help" open={true}>
                <article>
                    <h2>{"How to play"}</h2>
                    <ul>
                        <li>{"Click a card to turn it over, then pick a second one."}</li>
                        <li>{"Matching cards stay face up, others turn back over."}</li>
                        <li>{"Every second card you turn counts as a try."}</li>
                        <li>{"Press R to restart and Escape to close a dialog."}</li>
                    </ul>
                    <footer>
                        <button onclick={on_close}>{"Got it"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct QuitProps {
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub(crate) fn QuitDialog(props: &QuitProps) -> Html {
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <Modal>
            <dialog id="quit" open={true}>
                <article>
                    <h2>{"Leave this round?"}</h2>
                    <p>{"Your progress on the current board will be lost."}</p>
                    <footer>
                        <button type="reset" onclick={on_cancel}>{"Keep playing"}</button>
                        <button onclick={on_confirm}>{"Quit"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct VictoryProps {
    pub elapsed: Duration,
    pub tries: u16,
    pub on_play_again: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component]
pub(crate) fn VictoryDialog(props: &VictoryProps) -> Html {
    let on_play_again = props.on_play_again.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal>
            <dialog id="victory" open={true}>
                <article>
                    <h2>{"All pairs found!"}</h2>
                    <dl>
                        <dt>{"Time"}</dt>
                        <dd>{format_elapsed(props.elapsed)}</dd>
                        <dt>{"Tries"}</dt>
                        <dd>{props.tries}</dd>
                    </dl>
                    <footer>
                        <button type="reset" onclick={on_close}>{"Close"}</button>
                        <button onclick={on_play_again}>{"Play again"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}
