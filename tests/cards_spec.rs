use std::sync::Arc;

use idcards::cards::CardStore;
use idcards::db::SqliteStore;
use idcards::models::CardKind;
use idcards::session::SessionStore;
use idcards::store::KeyValueStore;
use speculate2::speculate;

const DORM: &str = "data:image/png;base64,ZG9ybQ==";
const LIBRARY: &str = "data:image/jpeg;base64,bGlicmFyeQ==";
const GYM: &str = "data:image/gif;base64,Z3lt";

speculate! {
    before {
        let db = SqliteStore::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
        let shared: Arc<dyn KeyValueStore> = Arc::new(db.clone());
        let sessions = SessionStore::new(Arc::clone(&shared));
        let cards = CardStore::new(shared);
    }

    describe "put" {
        it "stores a card for the active student" {
            sessions.login("42").expect("Login failed");
            cards.put("42", CardKind::Dorm, DORM).expect("Save failed");

            assert_eq!(cards.get("42", CardKind::Dorm).expect("Query failed").as_deref(), Some(DORM));
        }

        it "has no effect on storage without an active session" {
            cards.put("42", CardKind::Dorm, DORM).expect("Save failed");

            assert!(db.keys().expect("Query failed").is_empty());
        }

        it "overwrites only the kind being saved" {
            sessions.login("42").expect("Login failed");
            cards.put("42", CardKind::Dorm, DORM).expect("Save failed");
            cards.put("42", CardKind::Library, LIBRARY).expect("Save failed");
            cards.put("42", CardKind::Dorm, GYM).expect("Save failed");

            let all = cards.get_all("42").expect("Query failed");
            assert_eq!(all.get(CardKind::Dorm), Some(GYM));
            assert_eq!(all.get(CardKind::Library), Some(LIBRARY));
            assert_eq!(all.get(CardKind::Gym), None);
        }

        it "writes the record under the student's key" {
            sessions.login("42").expect("Login failed");
            cards.put("42", CardKind::Gym, GYM).expect("Save failed");

            let raw = db.get("idCards_42").expect("Query failed").expect("Record missing");
            let json: serde_json::Value = serde_json::from_str(&raw).expect("Invalid JSON");
            assert_eq!(json, serde_json::json!({ "gym": GYM }));
        }
    }

    describe "get_all" {
        it "returns an empty set when nothing is stored" {
            sessions.login("42").expect("Login failed");
            assert!(cards.get_all("42").expect("Query failed").is_empty());
        }

        it "keeps cards across logout and login" {
            sessions.login("42").expect("Login failed");
            cards.put("42", CardKind::Dorm, DORM).expect("Save failed");
            sessions.logout().expect("Logout failed");

            assert!(cards.get_all("42").expect("Query failed").is_empty());

            sessions.login("42").expect("Login failed");
            let all = cards.get_all("42").expect("Query failed");
            assert_eq!(all.get(CardKind::Dorm), Some(DORM));
        }

        it "isolates students from each other" {
            sessions.login("42").expect("Login failed");
            cards.put("42", CardKind::Dorm, DORM).expect("Save failed");
            sessions.logout().expect("Logout failed");

            sessions.login("7").expect("Login failed");
            assert!(cards.get_all("7").expect("Query failed").is_empty());
            assert!(cards.get_all("42").expect("Query failed").is_empty());
            assert!(cards.get("42", CardKind::Dorm).expect("Query failed").is_none());
        }
    }
}
