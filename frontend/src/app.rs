use yew::html::Scope;
use yew::prelude::*;

use crate::components::admin::AdminPanel;
use crate::resources::{AddressResource, CustomerResource};

/// Root shell: one tab per resource console.
///
/// The customers console and the addresses console are the same generic
/// panel instantiated with different resource descriptors.
pub struct App {
    active_tab: String,
}

pub enum Msg {
    SetTab(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_tab: "customers".to_string(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                if self.active_tab == tab {
                    return false;
                }
                self.active_tab = tab;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="admin-root">
                <h1>{ "Customer Service Administration" }</h1>
                <div class="tab-bar">
                    { self.tab_button(link, "customers", "Customers") }
                    { self.tab_button(link, "addresses", "Addresses") }
                </div>
                {
                    if self.active_tab == "customers" {
                        html! { <AdminPanel<CustomerResource> /> }
                    } else {
                        html! { <AdminPanel<AddressResource> /> }
                    }
                }
            </div>
        }
    }
}

impl App {
    fn tab_button(&self, link: &Scope<App>, tab: &'static str, label: &'static str) -> Html {
        html! {
            <button
                class={classes!("tab-btn", if self.active_tab == tab { "active" } else { "" })}
                onclick={link.callback(move |_| Msg::SetTab(tab.to_string()))}
            >
                { label }
            </button>
        }
    }
}
