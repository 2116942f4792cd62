use api::catalog;
use dioxus::prelude::*;
use ui::components::Spinner;
use ui::use_auth;

/// User directory, admin only.
#[component]
pub fn Users() -> Element {
    let auth = use_auth();

    let users = use_resource(move || {
        let auth = auth.clone();
        async move {
            let token = auth.token();
            catalog::users(auth.backend(), token.as_deref()).await
        }
    });

    let Some(users) = users.cloned() else {
        return rsx! { Spinner { label: "Loading users..." } };
    };

    rsx! {
        table { class: "data",
            thead {
                tr {
                    th {}
                    th { "Name" }
                    th { "Email" }
                    th { "Role" }
                    th { "Joined" }
                }
            }
            tbody {
                for user in users {
                    tr { key: "{user.id}",
                        td {
                            img { class: "avatar", src: "{user.avatar_url()}", alt: "{user.display_name()}" }
                        }
                        td { "{user.display_name()}" }
                        td { "{user.email}" }
                        td { "{user.role.as_str()}" }
                        td { "{user.created_at.clone().unwrap_or_default()}" }
                    }
                }
            }
        }
    }
}
