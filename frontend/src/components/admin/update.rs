//! Update function for the admin panel.
//!
//! Elm-style: receives the current state, the `Context`, and a message,
//! mutates the state, and returns whether the view should re-render. Edits
//! and Clear are synchronous; every other trigger plans one request,
//! dispatches it off the update path, and re-enters through
//! `Msg::Finished` carrying the request token.

use gloo_console::{debug, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::resources::FormResource;

use super::messages::{Action, Msg};
use super::requests::dispatch;
use super::state::AdminPanel;

pub fn update<R: FormResource>(
    component: &mut AdminPanel<R>,
    ctx: &Context<AdminPanel<R>>,
    msg: Msg<R>,
) -> bool {
    match msg {
        Msg::Edit(key, value) => {
            component.fields.set(key, value);
            true
        }
        Msg::Trigger(Action::Clear) => {
            component.reset();
            true
        }
        Msg::Trigger(action) => {
            let seq = component.begin();
            if let Some(plan) = R::plan(action, &component.fields) {
                debug!(
                    "dispatching",
                    R::ENTITY,
                    format!("{:?}", action),
                    plan.path.clone()
                );
                let base = ctx.props().base.to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = dispatch::<R::Record>(action, plan, &base).await;
                    link.send_message(Msg::Finished {
                        seq,
                        action,
                        outcome,
                    });
                });
            }
            true
        }
        Msg::Finished {
            seq,
            action,
            outcome,
        } => {
            if !component.finish(seq, action, outcome) {
                warn!("discarding stale response", R::ENTITY, format!("{:?}", action));
                return false;
            }
            true
        }
    }
}
