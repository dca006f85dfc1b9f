use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_the_message_when_present() {
        let html = render_to_string(|| {
            let error = create_rw_signal(Some("Wrong credentials, try again...".to_string()));
            view! { <InlineErrorMessage error={error} /> }
        });
        assert!(html.contains("Wrong credentials, try again..."));
    }

    #[test]
    fn renders_nothing_without_an_error() {
        let html = render_to_string(|| {
            let error = create_rw_signal(None::<String>);
            view! { <InlineErrorMessage error={error} /> }
        });
        assert!(!html.contains("Wrong credentials"));
    }
}
