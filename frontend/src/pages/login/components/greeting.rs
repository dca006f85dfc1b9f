use leptos::*;

/// Post-login greeting. Clicking it navigates back to `/`, which
/// remounts a fresh login screen.
#[component]
pub fn Greeting(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let restart = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <p
                class="text-center text-3xl font-extrabold text-gray-900 whitespace-pre-line cursor-pointer"
                on:click=restart
            >
                {move || text.get()}
            </p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_the_two_line_greeting() {
        let html = render_to_string(|| {
            let (text, _) = create_signal("Welcome back\nSteve".to_string());
            view! { <Greeting text=text /> }
        });
        assert!(html.contains("Welcome back"));
        assert!(html.contains("Steve"));
    }
}
