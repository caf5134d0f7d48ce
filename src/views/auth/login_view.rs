use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::Landing;
use crate::hooks::{use_document_title, use_session};
use crate::models::NavMessage;
use crate::routes::Route;
use crate::services::perform_login;
use crate::utils::LOGIN_ERROR_MESSAGE;
use crate::validation::LoginForm;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    use_document_title("Login");
    let session = use_session();
    let navigator = use_navigator();
    let location = use_location();

    let form = use_state(LoginForm::default);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Banner de éxito que llega en el estado del historial (p. ej. tras registrarse)
    let banner = {
        let initial = location
            .as_ref()
            .and_then(|l| l.state::<NavMessage>())
            .map(|m| m.message.clone());
        use_state(move || initial)
    };

    // Se reemplaza la entrada del historial para que el banner se vea una sola vez
    {
        let navigator = navigator.clone();
        let has_banner = banner.is_some();
        use_effect_with((), move |_| {
            if has_banner {
                if let Some(navigator) = navigator {
                    navigator.replace(&Route::Login);
                }
            }
            || ()
        });
    }

    let on_email_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm { email: input.value(), ..(*form).clone() });
        })
    };

    let on_password_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm { password: input.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let loading = loading.clone();
        let error = error.clone();
        let login = session.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.validate() {
                Ok(request) => request,
                Err(validation) => {
                    error.set(Some(validation.to_string()));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let loading = loading.clone();
            let error = error.clone();
            let login = login.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match perform_login(&request).await {
                    Ok(session) => {
                        let landing = Landing::for_role(&session.role);
                        login.emit(session);
                        loading.set(false);
                        if let Some(navigator) = navigator {
                            landing.navigate(&navigator);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error de login: {}", e);
                        loading.set(false);
                        error.set(Some(LOGIN_ERROR_MESSAGE.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"📅"}</div>
                    </div>
                    <h1>{"Sistema de Turnos"}</h1>
                    <p>{"Inicia sesión para reservar tu turno"}</p>
                </div>

                if let Some(message) = (*banner).clone() {
                    <div class="success-alert">{message}</div>
                }

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Ingresa tu email"
                            value={form.email.clone()}
                            oninput={on_email_change}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            value={form.password.clone()}
                            oninput={on_password_change}
                            required=true
                        />
                    </div>

                    if let Some(message) = (*error).clone() {
                        <div class="error-alert">{message}</div>
                    }

                    <button type="submit" class="btn-login" disabled={*loading}>
                        <span class="btn-text">
                            { if *loading { "Ingresando..." } else { "Iniciar Sesión" } }
                        </span>
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"¿No tienes cuenta?"}</p>
                        <Link<Route> to={Route::Register} classes="btn-register-link">
                            {"Regístrate aquí"}
                        </Link<Route>>
                    </div>
                </form>
            </div>
        </div>
    }
}
