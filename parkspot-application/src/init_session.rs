use super::*;
use gateways::session::{SessionGateway, SubscriptionGateway};

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated {
        session: Session,
        /// `None` if the status could not be fetched.
        subscription: Option<SubscriptionStatus>,
    },
    Unauthenticated,
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated { session, .. } => Some(session),
            Self::Unauthenticated => None,
        }
    }
}

/// Ask the identity provider for an active session and,
/// if there is one, fetch the subscription status of its user.
pub fn init_session(
    sessions: &dyn SessionGateway,
    subscriptions: &dyn SubscriptionGateway,
) -> Result<AuthState> {
    let session = sessions.current_session().map_err(|err| {
        error!("Auth initialization error: {err}");
        AppError::AuthInit(err)
    })?;
    let Some(session) = session else {
        info!("No active session");
        return Ok(AuthState::Unauthenticated);
    };
    let subscription = match subscriptions.fetch_subscription_status(&session.user_id) {
        Ok(status) => Some(status),
        Err(err) => {
            warn!(
                "Failed to fetch subscription status of user {}: {err}",
                session.user_id
            );
            None
        }
    };
    Ok(AuthState::Authenticated {
        session,
        subscription,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<'a> {
    Granted(&'a Session),
    RedirectToLogin { from: String },
}

/// Protected views are only accessible with a session.
pub fn guard<'a>(auth: &'a AuthState, requested_path: &str) -> Access<'a> {
    match auth.session() {
        Some(session) => Access::Granted(session),
        None => {
            debug!("Redirecting {requested_path} to {LOGIN_PATH}");
            Access::RedirectToLogin {
                from: requested_path.to_string(),
            }
        }
    }
}
