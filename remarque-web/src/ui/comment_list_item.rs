use remarque_client::api::{Action, Comment, CommentId, UserId};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListItemProps {
    pub comment: Comment,
    pub current_user: UserId,
    pub pending_reply: String,
    pub on_reply_change: Callback<(CommentId, String)>,
    pub on_reply_submit: Callback<CommentId>,
    pub on_action: Callback<Action>,
}

#[function_component(CommentListItem)]
pub fn comment_list_item(p: &CommentListItemProps) -> Html {
    let id = p.comment.id;

    // The store refuses foreign deletes anyway, this only hides the button
    let delete_button = (p.comment.user_id == p.current_user).then(|| {
        html! {
            <button
                type="button"
                class="btn btn-sm btn-outline-danger ms-2"
                onclick={ p.on_action.reform(move |_| Action::DeleteComment(id)) }
            >
                { "Delete" }
            </button>
        }
    });

    let replies = p.comment.replies.iter().map(|r| {
        html! {
            <ui::ReplyListItem
                key={ r.id.0 }
                comment_id={ id }
                reply={ r.clone() }
                is_owned={ r.user_id == p.current_user }
                on_action={ p.on_action.clone() }
            />
        }
    });

    let on_reply_submit = p.on_reply_submit.clone();
    html! {
        <li class="list-group-item">
            <div class="d-flex align-items-center">
                <span class="flex-grow-1">{ &p.comment.text }</span>
                { for delete_button }
            </div>
            <div class="input-group input-group-sm mt-2">
                <input
                    type="text"
                    class="form-control"
                    placeholder="Reply"
                    value={ p.pending_reply.clone() }
                    oninput={ p.on_reply_change.reform(move |e: web_sys::InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        (id, input.value())
                    }) }
                    onkeydown={ Callback::from(move |e: web_sys::KeyboardEvent| {
                        if e.key() == "Enter" {
                            on_reply_submit.emit(id);
                        }
                    }) }
                />
                <button
                    type="button"
                    class="btn btn-secondary"
                    onclick={ p.on_reply_submit.reform(move |_| id) }
                >
                    { "Reply" }
                </button>
            </div>
            <ul class="reply-list list-unstyled mt-2">
                { for replies }
            </ul>
        </li>
    }
}
