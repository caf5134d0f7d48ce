use chrono::NaiveDate;
use std::fmt;
use yew::prelude::*;

use super::use_remote_list::{use_remote_list, RemoteList};
use crate::booking::MonthKey;
use crate::models::{Location, Service};
use crate::services::ApiClient;

/// Token del cliente como parte del key: si cambia la sesión se vuelve a
/// pedir. El `Debug` no imprime el token.
#[derive(Clone, PartialEq)]
struct TokenKey(Option<String>);

impl TokenKey {
    fn of(api: &ApiClient) -> Self {
        Self(api.token().map(str::to_string))
    }
}

impl fmt::Debug for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("con sesión"),
            None => f.write_str("anónimo"),
        }
    }
}

#[hook]
pub fn use_services(api: ApiClient) -> RemoteList<Service> {
    use_remote_list(TokenKey::of(&api), move |_| async move { api.get_services().await })
}

/// Se vuelve a pedir cada vez que cambia el servicio
#[hook]
pub fn use_locations(api: ApiClient, service_id: i64) -> RemoteList<Location> {
    use_remote_list((TokenKey::of(&api), service_id), move |(_, id)| async move {
        api.get_locations(id).await
    })
}

#[hook]
pub fn use_available_dates(api: ApiClient, service_id: i64, month: MonthKey) -> RemoteList<NaiveDate> {
    use_remote_list((TokenKey::of(&api), service_id, month), move |(_, id, month)| async move {
        api.get_available_dates(id, month).await
    })
}

#[hook]
pub fn use_available_slots(api: ApiClient, service_id: i64, date: NaiveDate) -> RemoteList<String> {
    use_remote_list((TokenKey::of(&api), service_id, date), move |(_, id, date)| async move {
        api.get_available_slots(id, date).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_token_changes_the_key() {
        let before = TokenKey::of(&ApiClient::with_token("jwt-viejo"));
        let after = TokenKey::of(&ApiClient::with_token("jwt-nuevo"));
        assert_ne!((before.clone(), 1_i64), (after, 1_i64));
        assert_eq!(before, TokenKey::of(&ApiClient::with_token("jwt-viejo")));
        assert_ne!(before, TokenKey::of(&ApiClient::new()));
    }

    #[test]
    fn token_never_appears_in_logged_keys() {
        let key = (TokenKey::of(&ApiClient::with_token("secreto")), 7_i64);
        let logged = format!("{:?}", key);
        assert!(!logged.contains("secreto"));
        assert_eq!(logged, "(con sesión, 7)");
    }
}
