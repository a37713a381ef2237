use countview::{CounterModel, Event, ObserverId, Tail};
use gloo_console::{error, log};
use web_sys::MouseEvent;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::warning::{self, Warning, WarningPanel};

/// Owns the counter model and re-renders whenever the counter reports a change.
pub struct CounterView {
    model: CounterModel<Warning>,
    observer: ObserverId,
}

impl CounterView {
    fn load_warning(&self, ctx: &Context<Self>) {
        log!(format!("loading warning view (fetch {})", self.model.fetches()));
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Event::Loaded(warning::load().await));
        });
    }
}

impl Component for CounterView {
    type Message = Event<Warning>;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = CounterModel::new();
        let link = ctx.link().clone();
        let observer = model.subscribe(move |change| link.send_message(Event::Changed(*change)));
        CounterView { model, observer }
    }

    fn update(&mut self, ctx: &Context<Self>, event: Self::Message) -> bool {
        match &event {
            Event::Changed(change) if change.crossed_up() => {
                log!(format!("count {} is above the threshold", change.current));
            }
            Event::Changed(change) if change.crossed_down() => {
                log!(format!("count {} is back under the threshold", change.current));
            }
            Event::Loaded(Ok(_)) => {
                log!("warning view loaded");
            }
            Event::Loaded(Err(err)) => {
                error!(err.to_string());
            }
            _ => {}
        }
        match self.model.update(event) {
            Ok(effects) => {
                if effects.fetch {
                    self.load_warning(ctx);
                }
                effects.render
            }
            Err(err) => {
                error!(err.to_string());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.model.view();
        let controls = view.controls.into_iter().map(|control| {
            let action = control.action;
            let onclick = ctx.link().callback(move |_: MouseEvent| Event::Act(action));
            html! {
                <button {onclick}>{control.label}</button>
            }
        });
        let tail = match view.tail {
            Tail::Text(text) => html! { <p>{text}</p> },
            Tail::Placeholder => html! {},
            Tail::Secondary(warning) => html! { <WarningPanel {warning} /> },
        };

        html! {
            <div>
                <h1>{view.title}</h1>
                <h2 class={classes!(view.count_line.class)}>{view.count_line.text}</h2>
                { for controls }
                { tail }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // The observer holds a scope handle back to this component.
        if let Err(err) = self.model.unsubscribe(self.observer) {
            error!(err.to_string());
        }
    }
}
