use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Slide-in sheet container. Visibility is driven by toggling the `show`
/// class on the container element via [`open_top_sheet`]/[`close_top_sheet`].
pub struct MaterialTopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct TopSheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for MaterialTopSheet {
    type Message = ();
    type Properties = TopSheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(sheet_ref: NodeRef) {
    toggle_sheet(sheet_ref, true);
}

pub fn close_top_sheet(sheet_ref: NodeRef) {
    toggle_sheet(sheet_ref, false);
}

fn toggle_sheet(sheet_ref: NodeRef, visible: bool) {
    if let Some(sheet) = sheet_ref.cast::<HtmlElement>() {
        spawn_local(async move {
            // Let the element get laid out first so the CSS transition runs.
            TimeoutFuture::new(50).await;
            let class_list = sheet.class_list();
            let result = if visible {
                class_list.add_1("show")
            } else {
                class_list.remove_1("show")
            };
            if result.is_err() {
                gloo_console::warn!("top sheet class toggle failed");
            }
        });
    }
}
