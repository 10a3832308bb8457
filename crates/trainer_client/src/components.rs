//! Components that put the render model on the page.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::browser::{click_target, DomFields};
use crate::handlers::Handlers;
use crate::hooks::{use_originals, use_trainer_context};
use crate::render::{control_id, field_id, render_rows, Control, Field, RowView};

/// The whole trainer list: one fieldset per listed record, then the creation row.
///
/// Every new snapshot rebuilds all rows, so inputs never carry edits across a
/// refresh.
#[component]
pub fn TrainerList() -> impl IntoView {
    let api = use_trainer_context().api;
    let originals = use_originals();

    view! {
        <div class="list">
            {move || {
                let snapshot = originals.get();
                let handlers = Handlers::new(api.clone(), snapshot.clone());
                render_rows(&snapshot)
                    .into_iter()
                    .map(|row| view! { <TrainerRow row=row handlers=handlers.clone() /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn TrainerRow(row: RowView, handlers: Handlers) -> impl IntoView {
    let index = row.index;

    let inputs = Field::ALL
        .into_iter()
        .map(|field| {
            view! {
                <input
                    id=field_id(field, index)
                    type=field.input_type()
                    value=row.value(field).to_string()
                    placeholder=field.placeholder()
                />
            }
        })
        .collect_view();

    let buttons = row
        .controls()
        .iter()
        .map(|&control| {
            view! { <ControlButton control=control index=index handlers=handlers.clone() /> }
        })
        .collect_view();

    view! {
        <fieldset>
            {inputs}
            {buttons}
        </fieldset>
    }
}

/// A row button. The label and icon are nested spans without ids, so a click
/// on either resolves the row through the button's id.
#[component]
fn ControlButton(control: Control, index: usize, handlers: Handlers) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        let fields = DomFields;
        let result = match control {
            Control::Create => handlers.on_create(&fields),
            Control::Update => handlers.on_update(&click_target(&ev), &fields),
            Control::Delete => handlers.on_delete(&click_target(&ev), &fields),
        };
        if let Err(err) = result {
            handlers.report(&err);
        }
    };
    let is_delete = control == Control::Delete;

    view! {
        <button
            id=control_id(control, index)
            class:delete=is_delete
            on:click=on_click
        >
            <span class="text">{control.label()}</span>
            <span class="material-symbols-outlined">{control.icon()}</span>
        </button>
    }
}
