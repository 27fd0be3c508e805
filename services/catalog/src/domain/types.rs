use uuid::Uuid;

/// Account identity. `labels` is the number of node labels the user may hold
/// at once; enforcement belongs to the provisioner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub labels: Option<i32>,
}

/// Authorization grant: resource scope plus write flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub role: String,
    pub access_to: Option<String>,
    pub can_write: Option<bool>,
}

/// External source of lab definitions, with the credentials to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub repository: String,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Topology template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lab {
    pub id: String,
    pub author: Option<String>,
    pub name: Option<String>,
    pub version: Option<i32>,
    pub json: Option<String>,
    pub repository: Option<String>,
}

impl Lab {
    /// Parse the stored topology document.
    pub fn topology(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        parse_topology(self.json.as_deref())
    }
}

/// Running instance of a lab owned by `username`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLab {
    pub id: String,
    pub username: String,
    pub author: Option<String>,
    pub name: Option<String>,
    pub version: Option<i32>,
    pub json: Option<String>,
    pub repository: Option<String>,
}

impl ActiveLab {
    /// Snapshot a template into an instance owned by `username`.
    pub fn from_lab(lab: &Lab, username: impl Into<String>) -> Self {
        Self {
            id: lab.id.clone(),
            username: username.into(),
            author: lab.author.clone(),
            name: lab.name.clone(),
            version: lab.version,
            json: lab.json.clone(),
            repository: lab.repository.clone(),
        }
    }

    pub fn topology(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        parse_topology(self.json.as_deref())
    }
}

fn parse_topology(json: Option<&str>) -> Result<Option<serde_json::Value>, serde_json::Error> {
    json.map(serde_json::from_str).transpose()
}

/// Node of an active lab. `label` is an externally issued handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNode {
    pub label: i32,
    pub username: Option<String>,
    pub lab_id: Option<String>,
    pub node_id: Option<i32>,
    pub state: Option<String>,
}

/// Interface `id` on node `label`, linked to interface `dst_if` of node `dst_label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInterface {
    pub id: i32,
    pub label: i32,
    pub dst_label: Option<i32>,
    pub dst_if: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    pub id: i32,
    pub inside_ip: Option<String>,
    pub outside_ip: Option<String>,
    pub master: Option<bool>,
}

/// Controller fields before the database assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewController {
    pub inside_ip: Option<String>,
    pub outside_ip: Option<String>,
    pub master: Option<bool>,
}

/// Progress record of an asynchronous job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub status: Option<String>,
    pub message: Option<String>,
    pub progress: Option<i32>,
    pub username: Option<String>,
}

impl Task {
    /// Fresh task with a time-ordered id and zero progress.
    pub fn new(username: Option<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            status: None,
            message: None,
            progress: Some(0),
            username,
        }
    }
}
