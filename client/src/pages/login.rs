//! Login and register pages. Both render the email magic-link form.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <AuthForm login=true/>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <AuthForm/>
        </div>
    }
}
