use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub value: String,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let on_submit = p.on_submit.clone();
    html! {
        <div class="input-group">
            <input
                type="text"
                class="form-control"
                placeholder="Write a comment"
                value={ p.value.clone() }
                oninput={ p.on_change.reform(|e: web_sys::InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    input.value()
                }) }
                onkeydown={ Callback::from(move |e: web_sys::KeyboardEvent| {
                    if e.key() == "Enter" {
                        on_submit.emit(());
                    }
                }) }
            />
            <button
                type="button"
                class="btn btn-primary"
                onclick={ p.on_submit.reform(|_| ()) }
            >
                { "Add Comment" }
            </button>
        </div>
    }
}
