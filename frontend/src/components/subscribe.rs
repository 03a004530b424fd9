use yew::prelude::*;

use crate::navigation::Section;

/// Mailing list call to action. The form is presentational only: nothing is
/// submitted until a list provider is chosen.
#[function_component(Subscribe)]
pub fn subscribe() -> Html {
    html! {
        <section id={Section::Subscribe.id()} class="subscribe">
            <div class="container centered">
                <h2 class="subscribe-title">{"Join 10,000+ subscribers"}</h2>
                <p class="subscribe-text">{"Join our mailing list to get the latest news."}</p>
                <div class="subscribe-form">
                    <div class="subscribe-row">
                        <input type="email" placeholder="Enter your email" class="subscribe-input" />
                        <button type="button" class="subscribe-button">{"Subscribe"}</button>
                    </div>
                    <label class="subscribe-consent">
                        <input type="checkbox" />
                        <span>{"Join our mailing list to get the latest news."}</span>
                    </label>
                </div>
            </div>
            <style>
                {r#"
                    .subscribe {
                        background: #fff;
                        padding: 4rem 0;
                    }
                    .subscribe-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .subscribe-text {
                        color: #4b5563;
                        margin-bottom: 1.5rem;
                    }
                    .subscribe-form {
                        max-width: 28rem;
                        margin: 0 auto;
                    }
                    .subscribe-row {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .subscribe-input {
                        flex-grow: 1;
                        padding: 0.5rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                    }
                    .subscribe-input:focus {
                        outline: none;
                        box-shadow: 0 0 0 2px #ef4444;
                    }
                    .subscribe-button {
                        background: #ef4444;
                        color: #fff;
                        border: none;
                        padding: 0.5rem 1.5rem;
                        border-radius: 0.375rem;
                        cursor: pointer;
                    }
                    .subscribe-button:hover {
                        background: #dc2626;
                    }
                    .subscribe-consent {
                        margin-top: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    @media (max-width: 639px) {
                        .subscribe-row {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
