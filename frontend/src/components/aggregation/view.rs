//! View rendering for the aggregation query form: the form pane (table
//! picker, group/select column rows, submit and upload buttons) and the
//! result pane (spinner, error panel, or the rendered result table).

use common::model::column::ColumnOption;
use common::model::query::{AggregateFunction, QuerySpec};
use common::model::result::ResultRow;
use common::render::result_table;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::upload::upload_dialog;
use super::messages::Msg;
use super::state::{AggregationQueryComponent, FormError};

pub fn view(component: &AggregationQueryComponent, ctx: &Context<AggregationQueryComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="aggregation-root">
            <h1 class="app-title">{ ctx.props().title.clone() }</h1>
            { build_form(component, link) }
            { build_result_pane(component) }
            { upload_dialog(component, link) }
        </div>
    }
}

fn build_form(component: &AggregationQueryComponent, link: &Scope<AggregationQueryComponent>) -> Html {
    html! {
        <div class="query-form">
            { build_table_picker(component, link) }
            { build_group_columns(component, link) }
            { build_select_columns(component, link) }
            <div class="form-actions">
                <button
                    class="submit-btn"
                    onclick={link.callback(|_| Msg::Submit)}
                    disabled={component.loading}
                >
                    { "Submit" }
                </button>
                <button class="upload-btn" onclick={link.callback(|_| Msg::OpenUploadDialog)}>
                    { "Upload Data" }
                </button>
            </div>
        </div>
    }
}

fn build_table_picker(
    component: &AggregationQueryComponent,
    link: &Scope<AggregationQueryComponent>,
) -> Html {
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::TableSelected(select.value())
    });
    html! {
        <div class="form-row">
            <label>{ "Table Name" }</label>
            <select {onchange}>
                <option value="" selected={component.session.table_name.is_empty()}>
                    { "-- select a table --" }
                </option>
                {
                    for component.tables.iter().map(|table| html! {
                        <option
                            value={table.clone()}
                            selected={component.session.table_name == *table}
                        >
                            { table.clone() }
                        </option>
                    })
                }
            </select>
        </div>
    }
}

fn build_group_columns(
    component: &AggregationQueryComponent,
    link: &Scope<AggregationQueryComponent>,
) -> Html {
    html! {
        <div class="group-columns">
            <h2>{ "Group Columns" }</h2>
            {
                for component.session.group_columns.iter().enumerate().map(|(i, value)| {
                    let onchange = link.callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::GroupColumnChanged(i, select.value())
                    });
                    html! {
                        <div class="form-row">
                            { column_select(&component.group_options, value, onchange) }
                            <button
                                class="remove-btn"
                                onclick={link.callback(move |_| Msg::RemoveGroupColumn(i))}
                            >
                                { "Remove" }
                            </button>
                        </div>
                    }
                })
            }
            <button class="add-btn" onclick={link.callback(|_| Msg::AddGroupColumn)}>
                { "+ Add Group Column" }
            </button>
        </div>
    }
}

fn build_select_columns(
    component: &AggregationQueryComponent,
    link: &Scope<AggregationQueryComponent>,
) -> Html {
    html! {
        <div class="select-columns">
            <h2>{ "Select Columns" }</h2>
            {
                for component.session.select_columns.iter().enumerate().map(|(i, sel)| {
                    let on_column = link.callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SelectColumnChanged(i, select.value())
                    });
                    let on_function = link.callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SelectFunctionChanged(
                            i,
                            select.value().parse().unwrap_or_default(),
                        )
                    });
                    html! {
                        <div class="form-row">
                            { column_select(&component.select_options, &sel.column, on_column) }
                            <select onchange={on_function}>
                                {
                                    for AggregateFunction::ALL.iter().map(|func| html! {
                                        <option
                                            value={func.as_str()}
                                            selected={sel.function == *func}
                                        >
                                            { func.as_str() }
                                        </option>
                                    })
                                }
                            </select>
                            <button
                                class="remove-btn"
                                onclick={link.callback(move |_| Msg::RemoveSelectColumn(i))}
                            >
                                { "Remove" }
                            </button>
                        </div>
                    }
                })
            }
            <button class="add-btn" onclick={link.callback(|_| Msg::AddSelectColumn)}>
                { "+ Add Select Column" }
            </button>
        </div>
    }
}

/// Dropdown of column options with a leading blank entry.
fn column_select(options: &[ColumnOption], current: &str, onchange: Callback<Event>) -> Html {
    let current = current.to_string();
    html! {
        <select {onchange}>
            <option value="" selected={current.is_empty()}>{ "-- column --" }</option>
            {
                for options.iter().map(|opt| html! {
                    <option value={opt.value.clone()} selected={current == opt.value}>
                        { opt.label.clone() }
                    </option>
                })
            }
        </select>
    }
}

fn build_result_pane(component: &AggregationQueryComponent) -> Html {
    html! {
        <div class="result-pane">
            {
                if component.loading {
                    build_spinner()
                } else {
                    html! {}
                }
            }
            {
                if let Some(error) = &component.error {
                    build_error_panel(error)
                } else if let Some((spec, rows)) = &component.result {
                    build_result_table(spec, rows)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_spinner() -> Html {
    html! {
        <div class="spinner-wrap">
            <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
            <style>{ r#"@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }"# }</style>
        </div>
    }
}

fn build_error_panel(error: &FormError) -> Html {
    let (message, inner) = match error {
        FormError::Validation(err) => (err.to_string(), None),
        FormError::Query(err) => (err.message.clone(), err.inner_message.clone()),
    };
    html! {
        <div class="error-panel">
            <h3>{ "Error" }</h3>
            <p>{ message }</p>
            {
                if let Some(inner) = inner {
                    html! { <p class="error-inner">{ inner }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_result_table(spec: &QuerySpec, rows: &[ResultRow]) -> Html {
    let table = result_table(spec, rows);
    html! {
        <table class="response-table">
            <thead>
                <tr>
                    { for table.header.iter().map(|head| html! { <th>{ head.clone() }</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for table.rows.iter().map(|cells| html! {
                        <tr>
                            { for cells.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
