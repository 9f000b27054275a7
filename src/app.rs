use crate::auth::oauth::OAuthClient;
use crate::auth::sessions::SessionStore;
use crate::store::countries::COUNTRIES_URL;
use crate::store::DataStore;

/// Shared state handed to every request: the store client, the session
/// registry, and the OAuth client. Passed explicitly into `handle`
/// rather than through globals.
pub struct App<S: DataStore> {
    pub store: S,
    pub sessions: SessionStore,
    pub oauth: OAuthClient,
    pub countries_url: String,
}

impl<S: DataStore> App<S> {
    pub fn new(store: S, oauth: OAuthClient) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
            oauth,
            countries_url: COUNTRIES_URL.to_string(),
        }
    }
}
