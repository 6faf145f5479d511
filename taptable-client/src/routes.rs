//! Backend route table
//!
//! Path templates for every endpoint the client calls. Paths have shifted
//! between backend revisions, so they are data: the defaults match the
//! current backend and any subset can be overridden from a JSON file.
//! Placeholders are written `{name}`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiRoutes {
    // Auth
    pub login: String,
    pub register: String,
    pub profile_upgrade: String,

    // Menu
    pub menu: String,
    pub menu_create: String,
    pub menu_item: String,
    pub menu_dietary: String,
    pub menu_reclassify: String,
    pub public_menu: String,
    pub table_menu: String,

    // Tables
    pub tables: String,
    pub restaurant_tables: String,
    pub public_tables: String,
    pub table: String,
    pub table_regenerate: String,

    // Orders
    pub orders: String,
    pub order_create: String,
    pub order_status: String,

    // Dashboard
    pub analytics: String,
    pub settings: String,
    pub restaurant: String,
    pub health: String,
    pub upload: String,
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self {
            login: "/api/auth/login".into(),
            register: "/api/auth/register".into(),
            profile_upgrade: "/api/auth/upgrade".into(),

            menu: "/api/menu/{restaurant_id}".into(),
            menu_create: "/api/menu".into(),
            menu_item: "/api/menu/{item_id}".into(),
            menu_dietary: "/api/menu/{item_id}/dietary".into(),
            menu_reclassify: "/api/menu/reclassify/{restaurant_id}".into(),
            public_menu: "/api/menu/{restaurant_id}".into(),
            table_menu: "/menu/{restaurant_id}/table_{table_number}".into(),

            tables: "/api/tables".into(),
            restaurant_tables: "/api/restaurants/{restaurant_id}/tables".into(),
            public_tables: "/api/tables/public/{restaurant_id}".into(),
            table: "/api/tables/{table_id}".into(),
            table_regenerate: "/api/tables/{table_id}/regenerate".into(),

            orders: "/api/orders".into(),
            order_create: "/api/create-order".into(),
            order_status: "/api/orders/{order_id}/status".into(),

            analytics: "/api/analytics/{restaurant_id}".into(),
            settings: "/api/settings".into(),
            restaurant: "/api/restaurants/{restaurant_id}".into(),
            health: "/api/health".into(),
            upload: "/api/upload".into(),
        }
    }
}

impl ApiRoutes {
    /// Parse a (possibly partial) route table; missing entries keep their defaults
    pub fn from_json(json: &str) -> ClientResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a route table from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("cannot read routes file {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }
}

/// Characters escaped in a substituted value, so it stays inside one
/// path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Substitute `{name}` placeholders in a route template. Values are
/// percent-encoded.
pub fn render(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |path, (name, value)| {
            let encoded = utf8_percent_encode(value, PATH_SEGMENT).to_string();
            path.replace(&format!("{{{name}}}"), &encoded)
        })
}
