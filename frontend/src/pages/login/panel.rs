use leptos::{ev::SubmitEvent, Callback, *};

use crate::pages::login::{
    components::{form::LoginForm, greeting::Greeting},
    view_model::use_login_view_model,
};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

    let username = vm.username;
    let password = vm.password;
    let state = vm.state;

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    let username_input = Callback::new(move |value: String| username.set(value));
    let password_input = Callback::new(move |value: String| password.set(value));

    let greeting = Signal::derive(move || state.get().greeting.unwrap_or_default());

    view! {
        <Show
            when=move || state.get().is_logged_in
            fallback=move || view! {
                <LoginForm
                    username=username.read_only()
                    password=password.read_only()
                    state=state
                    on_username_input=username_input
                    on_password_input=password_input
                    on_submit=handle_submit
                />
            }
        >
            <Greeting text=greeting />
        </Show>
    }
}
