//! Aggregation query form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and the upload dialog. On first render the table list is fetched so the
//! table dropdown is populated before the user touches the form.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AggregationQueryProps;
pub use state::AggregationQueryComponent;

impl Component for AggregationQueryComponent {
    type Message = Msg;
    type Properties = AggregationQueryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AggregationQueryComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::TablesLoaded(api::list_tables().await));
            });
        }
    }
}
