use remarque_client::api::{Action, CommentId, Reply};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyListItemProps {
    pub comment_id: CommentId,
    pub reply: Reply,
    pub is_owned: bool,
    pub on_action: Callback<Action>,
}

#[function_component(ReplyListItem)]
pub fn reply_list_item(p: &ReplyListItemProps) -> Html {
    let comment_id = p.comment_id;
    let reply_id = p.reply.id;
    let delete_button = p.is_owned.then(|| {
        html! {
            <button
                type="button"
                class="btn btn-sm btn-link text-danger"
                onclick={ p.on_action.reform(move |_| Action::DeleteReply {
                    comment_id,
                    reply_id,
                }) }
            >
                { "Delete" }
            </button>
        }
    });

    html! {
        <li class="d-flex align-items-center">
            <span class="flex-grow-1">{ &p.reply.text }</span>
            { for delete_button }
        </li>
    }
}
