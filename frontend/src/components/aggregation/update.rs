//! Update function for the aggregation query form, Elm-style: current state
//! plus a message in, mutated state and a re-render decision out. All network
//! traffic is dispatched from here through the `api` gateway; completions come
//! back as messages tagged with the request token they belong to, and stale
//! tokens are dropped without touching state.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::top_sheet::material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::{AggregationQueryComponent, FormError};

pub fn update(
    component: &mut AggregationQueryComponent,
    ctx: &Context<AggregationQueryComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::TablesLoaded(outcome) => {
            match outcome {
                Ok(tables) => component.tables = tables,
                Err(err) => {
                    // The dropdown stays empty; a submit attempt will fail
                    // validation with "Select a table name."
                    gloo_console::error!(format!("table list fetch failed: {err}"));
                    show_toast("Failed to load the table list.");
                }
            }
            true
        }
        Msg::TableSelected(name) => {
            component.session.set_table(name.clone());
            component.group_options.clear();
            component.select_options.clear();

            let token = component.columns_token.next();
            if !name.is_empty() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = api::list_group_columns(&name).await;
                    link.send_message(Msg::GroupOptionsLoaded { token, outcome });
                    let outcome = api::list_select_columns(&name).await;
                    link.send_message(Msg::SelectOptionsLoaded { token, outcome });
                });
            }
            true
        }
        Msg::GroupOptionsLoaded { token, outcome } => {
            if !component.columns_token.is_current(token) {
                return false;
            }
            match outcome {
                Ok(options) => component.group_options = options,
                Err(err) => {
                    gloo_console::error!(format!("group column fetch failed: {err}"));
                    show_toast("Failed to load group columns.");
                }
            }
            true
        }
        Msg::SelectOptionsLoaded { token, outcome } => {
            if !component.columns_token.is_current(token) {
                return false;
            }
            match outcome {
                Ok(options) => component.select_options = options,
                Err(err) => {
                    gloo_console::error!(format!("select column fetch failed: {err}"));
                    show_toast("Failed to load select columns.");
                }
            }
            true
        }
        Msg::AddGroupColumn => {
            component.session.add_group_column();
            true
        }
        Msg::RemoveGroupColumn(index) => {
            component.session.remove_group_column(index);
            true
        }
        Msg::GroupColumnChanged(index, value) => {
            component.session.set_group_column(index, value);
            true
        }
        Msg::AddSelectColumn => {
            component.session.add_select_column();
            true
        }
        Msg::RemoveSelectColumn(index) => {
            component.session.remove_select_column(index);
            true
        }
        Msg::SelectColumnChanged(index, value) => {
            component.session.set_select_column(index, value);
            true
        }
        Msg::SelectFunctionChanged(index, function) => {
            component.session.set_select_function(index, function);
            true
        }
        Msg::Submit => {
            if component.loading {
                return false;
            }
            match component.session.build_spec() {
                Err(err) => {
                    component.result = None;
                    component.error = Some(FormError::Validation(err));
                    true
                }
                Ok(spec) => {
                    component.result = None;
                    component.error = None;
                    component.loading = true;

                    let token = component.query_token.next();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = api::run_query(&spec).await;
                        link.send_message(Msg::QueryFinished {
                            token,
                            spec,
                            outcome,
                        });
                    });
                    true
                }
            }
        }
        Msg::QueryFinished {
            token,
            spec,
            outcome,
        } => {
            if !component.query_token.is_current(token) {
                // Slow response from an older submission; the newer request
                // owns the busy flag and the result slot.
                return false;
            }
            component.loading = false;
            match outcome {
                Ok(rows) => {
                    component.error = None;
                    component.result = Some((spec, rows));
                }
                Err(err) => {
                    component.result = None;
                    component.error = Some(FormError::Query(err));
                }
            }
            true
        }
        Msg::OpenUploadDialog => {
            open_top_sheet(component.upload_dialog_ref.clone());
            true
        }
        Msg::CloseUploadDialog => {
            close_top_sheet(component.upload_dialog_ref.clone());
            true
        }
        Msg::UploadTableChanged(value) => {
            component.upload.table_name = value;
            true
        }
        Msg::UploadFileChanged(file) => {
            component.upload.has_file = file.is_some();
            component.upload_file = file;
            true
        }
        Msg::StartUpload => {
            if component.uploading {
                return false;
            }
            if let Err(err) = component.upload.validate() {
                show_toast(&err.to_string());
                return true;
            }
            let Some(file) = component.upload_file.clone() else {
                return true;
            };
            component.uploading = true;

            let table = component.upload.table_name.trim().to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::upload_file(&table, file).await;
                link.send_message(Msg::UploadFinished(outcome));
            });
            true
        }
        Msg::UploadFinished(outcome) => {
            component.uploading = false;
            match outcome {
                Ok(confirmation) => {
                    if confirmation.is_empty() {
                        show_toast("File uploaded.");
                    } else {
                        show_toast(&confirmation);
                    }
                    component.upload = Default::default();
                    component.upload_file = None;
                    if let Some(input) = component.file_input_ref.cast::<HtmlInputElement>() {
                        input.set_value("");
                    }
                    close_top_sheet(component.upload_dialog_ref.clone());

                    // The upload may have created a table; refresh the list.
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::TablesLoaded(api::list_tables().await));
                    });
                }
                Err(err) => {
                    // Dialog stays open so the user can fix the input.
                    show_toast(&err.to_string());
                }
            }
            true
        }
    }
}
