pub mod pages;
pub mod state;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::*;
    use leptos_router::*;

    use crate::pages::login::LoginPage;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting Gatekeeper Frontend (wasm)");

    mount_to_body(|| {
        view! {
            <crate::state::auth::AuthProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=LoginPage/>
                    </Routes>
                </Router>
            </crate::state::auth::AuthProvider>
        }
    });
}
