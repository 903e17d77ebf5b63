//! Upload dialog: a top sheet with the target table name, a file picker, and
//! the upload button. Validation (table name first, then file) runs in the
//! update logic before any network call; errors keep the sheet open.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::aggregation::helpers::input_value;
use crate::components::aggregation::messages::Msg;
use crate::components::aggregation::state::AggregationQueryComponent;
use crate::top_sheet::material_top_sheet::MaterialTopSheet;

pub fn upload_dialog(
    component: &AggregationQueryComponent,
    link: &Scope<AggregationQueryComponent>,
) -> Html {
    let on_close = link.callback(|_| Msg::CloseUploadDialog);
    let on_table = link.callback(|e: InputEvent| Msg::UploadTableChanged(input_value(e)));
    let on_file = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UploadFileChanged(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <MaterialTopSheet node_ref={component.upload_dialog_ref.clone()}>
            <div class="upload-dialog">
                <h2>{ "Upload Data File" }</h2>
                <div class="form-row">
                    <label>{ "Table Name" }</label>
                    <input
                        type="text"
                        value={component.upload.table_name.clone()}
                        oninput={on_table}
                        placeholder="new table name"
                    />
                </div>
                <div class="form-row">
                    <label>{ "File" }</label>
                    <input
                        type="file"
                        ref={component.file_input_ref.clone()}
                        onchange={on_file}
                    />
                </div>
                <div class="form-actions">
                    <button
                        class="submit-btn"
                        onclick={link.callback(|_| Msg::StartUpload)}
                        disabled={component.uploading}
                    >
                        { if component.uploading { "Uploading..." } else { "Upload" } }
                    </button>
                    <button class="close-btn" onclick={on_close}>{ "Close" }</button>
                </div>
            </div>
        </MaterialTopSheet>
    }
}
