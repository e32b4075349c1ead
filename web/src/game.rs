use crate::dialogs::{HelpDialog, QuitDialog, VictoryDialog};
use crate::menu::MenuView;
use crate::settings::Settings;
use crate::utils::*;
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use memora_core as game;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Dialog {
    Help,
    Quit,
    Victory,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum KeyCommand {
    Restart,
    CloseDialog,
}

impl KeyCommand {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "r" | "R" => Some(Self::Restart),
            "Escape" => Some(Self::CloseDialog),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start(game::Difficulty),
    Reveal(game::Position),
    Settle,
    ShowVictory,
    UpdateTime,
    Restart,
    OpenDialog(Dialog),
    CloseDialog,
    ConfirmQuit,
    Key(KeyCommand),
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    position: game::Position,
    symbol: game::Symbol,
    face: game::CardFace,
    callback: Callback<game::Position>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    use game::CardFace::*;

    let CardProps {
        position,
        symbol,
        face,
        callback,
    } = props.clone();

    let class = classes!(
        "card",
        match face {
            Hidden => classes!(),
            FaceUp => classes!("flip"),
            Matching => classes!("flip", "match-celebration"),
            Matched => classes!("flip", "matched"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", position);
        callback.emit(position);
    });

    html! {
        <div {class} {onclick}>
            <div class="card-face card-front"/>
            <div class="card-face card-back">
                <i class={classes!("icon", format!("icon-{}", symbol))} title={symbol}/>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    settings: Settings,
    engine: Option<game::MatchEngine>,
    view: game::BoardView,
    dialog: Option<Dialog>,
    prev_time: u64,
    timer_interval: Option<Interval>,
    settle_timeout: Option<Timeout>,
    victory_timeout: Option<Timeout>,
    _keydown: EventListener,
}

impl GameView {
    fn start(&mut self, ctx: &Context<Self>, difficulty: game::Difficulty) -> bool {
        let started = match self.engine.as_mut() {
            Some(engine) => engine.reset(difficulty).map(|_| ()),
            None => {
                let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
                game::MatchEngine::seeded(difficulty, seed).map(|engine| {
                    self.engine = Some(engine);
                })
            }
        };

        if let Err(err) = started {
            log::error!("cannot start a {} round: {}", difficulty.name(), err);
            return false;
        }

        if self.settings.difficulty != difficulty {
            self.settings.difficulty = difficulty;
            self.settings.local_save();
        }
        self.clear_round();
        true
    }

    fn clear_round(&mut self) {
        self.view.clear();
        self.dialog = None;
        self.prev_time = 0;
        self.timer_interval = None;
        self.settle_timeout = None;
        self.victory_timeout = None;
    }

    fn quit(&mut self) {
        self.clear_round();
        self.engine = None;
    }

    fn reveal_card(&mut self, ctx: &Context<Self>, position: game::Position) -> bool {
        if self.view.is_locked() || self.dialog.is_some() {
            return false;
        }
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };

        let was_initial = engine.state().is_initial();
        let outcome = engine.reveal(position);
        if !outcome.has_update() {
            return false;
        }

        if was_initial {
            self.timer_interval = Some(Self::create_timer(ctx));
        }
        if let game::RevealOutcome::SessionCompleted { tries, elapsed, .. } = outcome {
            log::info!("round completed in {:?} with {} tries", elapsed, tries);
            self.timer_interval = None;
        }
        if let Some(delay) = self.view.apply(outcome) {
            self.settle_timeout = Some(Self::schedule(ctx, delay, Msg::Settle));
        }
        true
    }

    fn settle(&mut self, ctx: &Context<Self>) -> bool {
        self.settle_timeout = None;
        if self.view.settle().is_none() {
            return false;
        }

        if self.engine.as_ref().is_some_and(|engine| engine.session().is_completed()) {
            self.victory_timeout = Some(Self::schedule(ctx, game::VICTORY_DELAY, Msg::ShowVictory));
        }
        true
    }

    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(1000, move || link.send_message(Msg::UpdateTime))
    }

    fn schedule(ctx: &Context<Self>, delay: Duration, msg: Msg) -> Timeout {
        let link = ctx.link().clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || link.send_message(msg))
    }

    fn create_keydown_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::document(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(command) = KeyCommand::from_key(&event.key()) {
                log::trace!("key command: {:?}", command);
                link.send_message(Msg::Key(command));
            }
        })
    }

    fn get_time(&self) -> Duration {
        self.engine
            .as_ref()
            .map_or(Duration::ZERO, |engine| engine.elapsed())
    }

    fn view_dialog(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_close = link.callback(|_| Msg::CloseDialog);

        match self.dialog {
            None => html! {},
            Some(Dialog::Help) => html! { <HelpDialog {on_close}/> },
            Some(Dialog::Quit) => html! {
                <QuitDialog on_confirm={link.callback(|_| Msg::ConfirmQuit)} on_cancel={on_close}/>
            },
            Some(Dialog::Victory) => {
                let (elapsed, tries) = self
                    .engine
                    .as_ref()
                    .map_or((Duration::ZERO, 0), |engine| (engine.elapsed(), engine.tries()));
                html! {
                    <VictoryDialog
                        {elapsed}
                        {tries}
                        on_play_again={link.callback(|_| Msg::Restart)}
                        {on_close}
                    />
                }
            }
        }
    }

    fn view_board(&self, ctx: &Context<Self>, engine: &game::MatchEngine) -> Html {
        let link = ctx.link();
        let session = engine.session();
        let (cols, _) = session.difficulty().shape();
        let elapsed_time = game::format_elapsed(self.get_time());
        let matches = format_matches(engine.matches_found(), engine.pair_count());
        let board_class = classes!(
            "board",
            (!self.view.is_locked() && !session.is_completed()).then_some("playable")
        );
        let board_style = format!("grid-template-columns: repeat({}, 1fr)", cols);
        let callback = link.callback(Msg::Reveal);

        html! {
            <>
                <nav class="hud">
                    <aside class="stat">{"Time "}<span id="timer">{elapsed_time}</span></aside>
                    <aside class="stat">{"Tries "}<span id="tries">{engine.tries()}</span></aside>
                    <aside class="stat">{"Matches "}<span id="matches">{matches}</span></aside>
                    <button onclick={link.callback(|_| Msg::Restart)}>{"Restart"}</button>
                    <button onclick={link.callback(|_| Msg::OpenDialog(Dialog::Help))}>{"?"}</button>
                    <button onclick={link.callback(|_| Msg::OpenDialog(Dialog::Quit))}>{"Quit"}</button>
                </nav>
                <div class={board_class} style={board_style}>
                    {
                        for session.cards().iter().enumerate().map(|(position, card)| {
                            let face = self.view.face_at(session, position);
                            html! {
                                <CardView
                                    key={card.id}
                                    {position}
                                    symbol={card.symbol}
                                    {face}
                                    callback={callback.clone()}
                                />
                            }
                        })
                    }
                </div>
            </>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            settings: LocalOrDefault::local_or_default(),
            engine: None,
            view: game::BoardView::new(),
            dialog: None,
            prev_time: 0,
            timer_interval: None,
            settle_timeout: None,
            victory_timeout: None,
            _keydown: GameView::create_keydown_listener(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start(difficulty) => {
                log::debug!("start: {:?}", difficulty);
                self.start(ctx, difficulty)
            }
            Reveal(position) => self.reveal_card(ctx, position),
            Settle => self.settle(ctx),
            ShowVictory => {
                self.victory_timeout = None;
                self.dialog = Some(Dialog::Victory);
                true
            }
            UpdateTime => {
                let time = self.get_time().as_secs();
                if self.prev_time != time {
                    self.prev_time = time;
                    true
                } else {
                    false
                }
            }
            Restart | Msg::Key(KeyCommand::Restart) => match self.engine.as_ref() {
                Some(engine) => {
                    let difficulty = engine.difficulty();
                    self.start(ctx, difficulty)
                }
                None => false,
            },
            OpenDialog(dialog) => self.dialog.replace(dialog) != Some(dialog),
            CloseDialog | Msg::Key(KeyCommand::CloseDialog) => self.dialog.take().is_some(),
            ConfirmQuit => {
                self.quit();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = match self.engine.as_ref() {
            Some(engine) => self.view_board(ctx, engine),
            None => html! {
                <MenuView
                    selected={self.settings.difficulty}
                    on_start={ctx.link().callback(Msg::Start)}
                    on_help={ctx.link().callback(|_| Msg::OpenDialog(Dialog::Help))}
                />
            },
        };

        html! {
            <div class="memora">
                {content}
                {self.view_dialog(ctx)}
            </div>
        }
    }
}
