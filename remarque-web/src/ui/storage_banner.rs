use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct StorageBannerProps {
    pub error: Option<String>,
}

#[function_component(StorageBanner)]
pub fn storage_banner(p: &StorageBannerProps) -> Html {
    let Some(error) = &p.error else {
        return html! {};
    };

    html! {
        <div class="storage-banner d-flex align-items-center p-2 my-2" role="status">
            <div>
                { "Changes could not be saved and are only kept in this tab: " }
                { error }
            </div>
        </div>
    }
}
