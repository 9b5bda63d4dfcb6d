//! Generic form-bound REST client panel: root module wiring the Yew
//! `Component` implementation with submodules for state, update logic, view
//! rendering, messages, props, and request dispatch.
//!
//! One panel instance drives one REST resource. Everything resource-specific
//! (paths, field list, table columns, action set) comes from the
//! [`FormResource`] descriptor the panel is instantiated with.

use yew::prelude::*;

use crate::resources::FormResource;

mod messages;
mod props;
mod requests;
mod state;
mod update;
mod view;

pub use messages::{Action, Completed, Msg};
pub use props::AdminProps;
pub use requests::{Method, RequestPlan};
pub use state::{AdminPanel, FieldValues};

impl<R: FormResource> Component for AdminPanel<R> {
    type Message = Msg<R>;
    type Properties = AdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
