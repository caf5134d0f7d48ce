use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::error::SubmitFailure;
use crate::hooks::use_document_title;
use crate::models::NavMessage;
use crate::routes::Route;
use crate::services::{classify_register_error, register_client};
use crate::utils::REGISTER_SUCCESS_MESSAGE;
use crate::validation::RegistrationForm;

/// Callback de input que escribe un campo del formulario y limpia el error
fn field_input(
    form: &UseStateHandle<RegistrationForm>,
    error: &UseStateHandle<Option<String>>,
    write: fn(&mut RegistrationForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    let error = error.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        write(&mut next, input.value());
        form.set(next);
        if error.is_some() {
            error.set(None);
        }
    })
}

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    use_document_title("Registro");
    let navigator = use_navigator();

    let form = use_state(RegistrationForm::default);
    let loading = use_state(|| false);
    let success = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let form = form.clone();
        let loading = loading.clone();
        let success = success.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.validate() {
                Ok(request) => request,
                Err(validation) => {
                    log::warn!("⚠️ Registro inválido: {}", validation);
                    error.set(Some(validation.to_string()));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let loading = loading.clone();
            let success = success.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match register_client(&request).await {
                    Ok(_) => {
                        loading.set(false);
                        success.set(true);
                        Timeout::new(CONFIG.register_redirect_delay_ms, move || {
                            if let Some(navigator) = navigator {
                                navigator.push_with_state(
                                    &Route::Login,
                                    NavMessage::new(REGISTER_SUCCESS_MESSAGE),
                                );
                            }
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Error de registro: {}", e);
                        loading.set(false);
                        match classify_register_error(&e) {
                            SubmitFailure::ServerErrorPage(message) => {
                                if let Some(navigator) = navigator {
                                    navigator.push_with_state(&Route::ServerError, NavMessage::new(message));
                                }
                            }
                            SubmitFailure::Inline(message) => error.set(Some(message)),
                        }
                    }
                }
            });
        })
    };

    if *success {
        return html! {
            <div class="login-screen">
                <div class="login-container register-container">
                    <div class="success-alert">
                        <h2>{"¡Registro exitoso!"}</h2>
                        <p>{"Redirigiendo al inicio de sesión..."}</p>
                    </div>
                </div>
            </div>
        };
    }

    let text_field = |id: &'static str, label: &'static str, kind: &'static str, value: &str, oninput: Callback<InputEvent>| html! {
        <div class="form-group">
            <label for={id}>{label}</label>
            <input
                type={kind}
                id={id}
                name={id}
                value={value.to_string()}
                oninput={oninput}
                required=true
            />
        </div>
    };

    html! {
        <div class="login-screen">
            <div class="login-container register-container">
                <div class="login-header">
                    <h1>{"Crear cuenta"}</h1>
                    <p>{"Regístrate para reservar turnos"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    {text_field("nombre", "Nombre", "text", &form.nombre,
                        field_input(&form, &error, |f, v| f.nombre = v))}
                    {text_field("apellido", "Apellido", "text", &form.apellido,
                        field_input(&form, &error, |f, v| f.apellido = v))}
                    {text_field("email", "Email", "email", &form.email,
                        field_input(&form, &error, |f, v| f.email = v))}
                    {text_field("telefono", "Teléfono", "tel", &form.telefono,
                        field_input(&form, &error, |f, v| f.telefono = v))}
                    {text_field("password", "Contraseña", "password", &form.password,
                        field_input(&form, &error, |f, v| f.password = v))}
                    {text_field("confirm_password", "Confirmar contraseña", "password", &form.confirm_password,
                        field_input(&form, &error, |f, v| f.confirm_password = v))}

                    if let Some(message) = (*error).clone() {
                        <div class="error-alert">{message}</div>
                    }

                    <button type="submit" class="btn-login" disabled={*loading}>
                        { if *loading { "Registrando..." } else { "Registrarse" } }
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"¿Ya tienes cuenta?"}</p>
                        <Link<Route> to={Route::Login} classes="btn-register-link">
                            {"Inicia sesión"}
                        </Link<Route>>
                    </div>
                </form>
            </div>
        </div>
    }
}
