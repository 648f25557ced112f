use remarque_client::{
    api::{Action, CommentId},
    CommentStore, Config,
};
use yew::prelude::*;

use crate::{storage::LocalSlot, ui};

pub enum AppMsg {
    PendingCommentChanged(String),
    PendingReplyChanged(CommentId, String),
    SubmitComment,
    SubmitReply(CommentId),
    Action(Action),
}

pub struct App {
    store: CommentStore,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            store: CommentStore::open(Config::default(), Box::new(LocalSlot)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let res = match msg {
            AppMsg::PendingCommentChanged(text) => {
                self.store.set_pending_comment(text);
                Ok(())
            }
            AppMsg::PendingReplyChanged(id, text) => {
                self.store.set_pending_reply(id, text);
                Ok(())
            }
            AppMsg::SubmitComment => self.store.submit_comment().map(|_| ()),
            AppMsg::SubmitReply(id) => self.store.submit_reply(id).map(|_| ()),
            AppMsg::Action(a) => {
                tracing::debug!("got user action {a:?}");
                self.store.apply(a)
            }
        };
        if let Err(e) = res {
            // Empty submissions and stale deletes are silently dropped
            tracing::debug!("ignored user action: {e}");
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current_user = self.store.current_user().clone();
        let on_reply_change = ctx
            .link()
            .callback(|(id, text): (CommentId, String)| AppMsg::PendingReplyChanged(id, text));
        let on_reply_submit = ctx.link().callback(AppMsg::SubmitReply);
        let on_action = ctx.link().callback(AppMsg::Action);

        html! {
            <div class="container">
                <h1>{ "Comment App" }</h1>
                <ui::StorageBanner
                    error={ self.store.save_error().map(|e| e.to_string()) }
                />
                <ui::CommentForm
                    value={ String::from(self.store.pending_comment()) }
                    on_change={ ctx.link().callback(AppMsg::PendingCommentChanged) }
                    on_submit={ ctx.link().callback(|_| AppMsg::SubmitComment) }
                />
                <ul class="list-group mt-3">
                    { for self.store.comments().iter().map(|c| html! {
                        <ui::CommentListItem
                            key={ c.id.0 }
                            comment={ c.clone() }
                            current_user={ current_user.clone() }
                            pending_reply={ String::from(self.store.pending_reply(c.id)) }
                            on_reply_change={ on_reply_change.clone() }
                            on_reply_submit={ on_reply_submit.clone() }
                            on_action={ on_action.clone() }
                        />
                    }) }
                </ul>
            </div>
        }
    }
}
