//! Session state and route gating
//!
//! The token lives in memory only and is dropped with the process. Access to
//! guarded routes depends on its presence alone: nothing checks expiry or
//! signature.

use tracing::info;

use super::data::SessionToken;

/// Views the console can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Gallery,
    CreateProject,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Gallery => "/home",
            Route::CreateProject => "/addProject",
        }
    }

    /// Parse a route path; anything unknown lands on the login view
    pub fn from_path(path: &str) -> Self {
        match path {
            "/home" => Route::Gallery,
            "/addProject" => Route::CreateProject,
            _ => Route::Login,
        }
    }

    /// Whether the route requires a session token
    ///
    /// `CreateProject` is reachable without one, matching the server-side
    /// route table this console was built against.
    pub fn is_guarded(&self) -> bool {
        matches!(self, Route::Gallery)
    }
}

/// LoggedOut / LoggedIn, represented by the presence of a token
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<SessionToken>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, token: SessionToken) {
        info!("🔓 Signed in");
        self.token = Some(token);
    }

    /// Drop the token. Returns whether a session was active.
    pub fn sign_out(&mut self) -> bool {
        let was_signed_in = self.token.take().is_some();
        if was_signed_in {
            info!("🔒 Signed out");
        }
        was_signed_in
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Resolve the route that is actually shown for a navigation request
pub fn guard(route: Route, session: &Session) -> Route {
    if route.is_guarded() && !session.is_authenticated() {
        Route::Login
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_redirects_without_token() {
        let session = Session::new();
        assert_eq!(guard(Route::Gallery, &session), Route::Login);
    }

    #[test]
    fn test_gallery_renders_with_token() {
        let mut session = Session::new();
        session.sign_in(SessionToken::new("t"));
        assert_eq!(guard(Route::Gallery, &session), Route::Gallery);
    }

    #[test]
    fn test_sign_out_restores_redirect() {
        let mut session = Session::new();
        session.sign_in(SessionToken::new("t"));

        assert!(session.sign_out());
        assert!(session.token().is_none());
        assert_eq!(guard(Route::Gallery, &session), Route::Login);

        assert!(!session.sign_out());
    }

    #[test]
    fn test_create_route_is_not_guarded() {
        let session = Session::new();
        assert_eq!(guard(Route::CreateProject, &session), Route::CreateProject);
        assert_eq!(guard(Route::Login, &session), Route::Login);
    }

    #[test]
    fn test_route_paths() {
        for route in [Route::Login, Route::Gallery, Route::CreateProject] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/nope"), Route::Login);
    }
}
