use dioxus::prelude::*;

use store::{AppConfig, RouteAccess};
use ui::SessionProvider;
use views::{
    About, Admin, AppLayout, AttractionDetail, Attractions, Home, Login, NotFound, Orders,
    UserCenter,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/attractions")]
        Attractions {},
        #[route("/attraction/:id")]
        AttractionDetail { id: i64 },
        #[route("/login")]
        Login {},
        #[route("/orders")]
        Orders {},
        #[route("/user")]
        UserCenter {},
        #[route("/admin")]
        Admin {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Access requirements checked by the layout before the page renders.
    fn access(&self) -> RouteAccess {
        match self {
            Route::Orders {} | Route::UserCenter {} => RouteAccess::AUTH,
            Route::Admin {} => RouteAccess::ADMIN,
            _ => RouteAccess::PUBLIC,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../tourism.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| AppConfig::from_toml_or_default(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_access_flags() {
        assert_eq!(Route::Orders {}.access(), RouteAccess::AUTH);
        assert_eq!(Route::UserCenter {}.access(), RouteAccess::AUTH);
        assert_eq!(Route::Admin {}.access(), RouteAccess::ADMIN);
        assert_eq!(Route::Home {}.access(), RouteAccess::PUBLIC);
        assert_eq!(Route::Login {}.access(), RouteAccess::PUBLIC);
        assert_eq!(Route::AttractionDetail { id: 3 }.access(), RouteAccess::PUBLIC);
    }

    #[test]
    fn test_routes_parse() {
        assert_eq!("/admin".parse::<Route>().ok(), Some(Route::Admin {}));
        assert_eq!(
            "/attraction/12".parse::<Route>().ok(),
            Some(Route::AttractionDetail { id: 12 })
        );
        assert_eq!(Route::UserCenter {}.to_string(), "/user");
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        assert_eq!(AppConfig::from_toml(CONFIG_TOML).unwrap(), AppConfig::default());
    }
}
