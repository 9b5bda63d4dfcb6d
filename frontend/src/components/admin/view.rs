//! View rendering for the admin panel: the form (controlled inputs), the
//! action buttons, the flash region, and the results table.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::resources::{FieldSpec, FormResource};

use super::messages::Msg;
use super::state::AdminPanel;

pub fn view<R: FormResource>(component: &AdminPanel<R>, ctx: &Context<AdminPanel<R>>) -> Html {
    let link = ctx.link();
    html! {
        <div class="admin-panel">
            { build_form(component, link) }
            { build_actions::<R>(link) }
            <div class="flash-message" role="status">{ component.flash.clone() }</div>
            { build_results(component) }
        </div>
    }
}

fn build_form<R: FormResource>(component: &AdminPanel<R>, link: &Scope<AdminPanel<R>>) -> Html {
    html! {
        <div class="resource-form">
            { for R::FIELDS.iter().map(|field| field_row(component, link, field)) }
        </div>
    }
}

fn field_row<R: FormResource>(
    component: &AdminPanel<R>,
    link: &Scope<AdminPanel<R>>,
    field: &'static FieldSpec,
) -> Html {
    let key = field.key;
    let oninput = link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::Edit(key, value)
    });
    html! {
        <div class="form-row">
            <label for={key}>{ field.label }</label>
            <input
                id={key}
                type="text"
                value={component.fields.get(key).to_string()}
                {oninput}
            />
        </div>
    }
}

fn build_actions<R: FormResource>(link: &Scope<AdminPanel<R>>) -> Html {
    html! {
        <div class="action-bar">
            { for R::ACTIONS.iter().map(|(action, label)| {
                let action = *action;
                html! {
                    <button class="action-btn" onclick={link.callback(move |_| Msg::Trigger(action))}>
                        { *label }
                    </button>
                }
            }) }
        </div>
    }
}

fn build_results<R: FormResource>(component: &AdminPanel<R>) -> Html {
    // No table at all until the first list/search completes.
    let Some(results) = &component.results else {
        return html! {};
    };
    html! {
        <div class="search-results">
            <table class="results-table" cellpadding="10">
                <thead>
                    <tr>{ for R::COLUMNS.iter().map(|column| html! { <th>{ *column }</th> }) }</tr>
                </thead>
                <tbody>
                    { for results.iter().map(|record| html! {
                        <tr>
                            { for R::record_cells(record).into_iter().map(|cell| html! { <td>{ cell }</td> }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
