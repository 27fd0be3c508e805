#![allow(async_fn_in_trait)]

use crate::domain::types::{
    ActiveInterface, ActiveLab, ActiveNode, Controller, Lab, NewController, Repository, Role,
    Task, User,
};
use crate::error::CatalogError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, CatalogError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogError>;
    async fn list(&self) -> Result<Vec<User>, CatalogError>;
    async fn create(&self, user: &User) -> Result<(), CatalogError>;

    /// Overwrite every non-key column. Returns `true` if the user exists.
    async fn update(&self, user: &User) -> Result<bool, CatalogError>;

    /// Delete a user and its role grants. Returns `true` if a row was deleted.
    async fn delete(&self, username: &str) -> Result<bool, CatalogError>;

    /// Roles granted to the user, resolved through `roles_to_users`.
    async fn list_roles(&self, username: &str) -> Result<Vec<Role>, CatalogError>;
}

/// Repository for roles and their grants.
pub trait RoleRepository: Send + Sync {
    async fn find(&self, role: &str) -> Result<Option<Role>, CatalogError>;
    async fn list(&self) -> Result<Vec<Role>, CatalogError>;
    async fn create(&self, role: &Role) -> Result<(), CatalogError>;

    /// Delete a role and its grants. Returns `true` if a row was deleted.
    async fn delete(&self, role: &str) -> Result<bool, CatalogError>;

    /// Users holding the role, resolved through `roles_to_users`.
    async fn list_users(&self, role: &str) -> Result<Vec<User>, CatalogError>;

    /// Grant `role` to `username`. Granting twice is a unique violation.
    async fn grant(&self, role: &str, username: &str) -> Result<(), CatalogError>;

    /// Revoke a grant. Returns `true` if the grant existed.
    async fn revoke(&self, role: &str, username: &str) -> Result<bool, CatalogError>;
}

/// Repository for lab source repositories (`repositories` table).
pub trait SourceRepository: Send + Sync {
    async fn find(&self, repository: &str) -> Result<Option<Repository>, CatalogError>;
    async fn list(&self) -> Result<Vec<Repository>, CatalogError>;

    /// Insert, or replace url and credentials of an existing repository.
    async fn upsert(&self, repository: &Repository) -> Result<(), CatalogError>;

    async fn delete(&self, repository: &str) -> Result<bool, CatalogError>;
}

/// Repository for lab templates.
pub trait LabRepository: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<Lab>, CatalogError>;
    async fn list(&self) -> Result<Vec<Lab>, CatalogError>;
    async fn list_by_repository(&self, repository: &str) -> Result<Vec<Lab>, CatalogError>;

    /// Insert, or replace every column of the lab with the same id.
    async fn upsert(&self, lab: &Lab) -> Result<(), CatalogError>;

    async fn delete(&self, id: &str) -> Result<bool, CatalogError>;
}

/// Repository for running lab instances.
pub trait ActiveLabRepository: Send + Sync {
    async fn find(&self, id: &str, username: &str) -> Result<Option<ActiveLab>, CatalogError>;
    async fn list_by_user(&self, username: &str) -> Result<Vec<ActiveLab>, CatalogError>;

    /// Store an instance together with its nodes and interfaces atomically.
    async fn create(
        &self,
        lab: &ActiveLab,
        nodes: &[ActiveNode],
        interfaces: &[ActiveInterface],
    ) -> Result<(), CatalogError>;

    /// Delete an instance, its nodes and their interfaces atomically.
    /// Returns `true` if the instance existed.
    async fn delete(&self, id: &str, username: &str) -> Result<bool, CatalogError>;
}

/// Repository for nodes of running lab instances.
pub trait ActiveNodeRepository: Send + Sync {
    async fn find(&self, label: i32) -> Result<Option<ActiveNode>, CatalogError>;
    async fn list_by_lab(
        &self,
        lab_id: &str,
        username: &str,
    ) -> Result<Vec<ActiveNode>, CatalogError>;

    /// Returns `true` if the node exists.
    async fn update_state(&self, label: i32, state: &str) -> Result<bool, CatalogError>;

    /// Number of labels currently held by the user, for comparison with `User::labels`.
    async fn count_by_user(&self, username: &str) -> Result<u64, CatalogError>;

    /// Delete a node and its interfaces atomically. Returns `true` if the node existed.
    async fn delete(&self, label: i32) -> Result<bool, CatalogError>;
}

/// Repository for interfaces of running nodes.
pub trait ActiveInterfaceRepository: Send + Sync {
    async fn list_by_node(&self, label: i32) -> Result<Vec<ActiveInterface>, CatalogError>;

    /// Point interface `(id, label)` at a far end. Returns `true` if the interface exists.
    async fn set_peer(
        &self,
        label: i32,
        id: i32,
        dst_label: Option<i32>,
        dst_if: Option<i32>,
    ) -> Result<bool, CatalogError>;
}

/// Repository for infrastructure controllers.
pub trait ControllerRepository: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<Controller>, CatalogError>;
    async fn list(&self) -> Result<Vec<Controller>, CatalogError>;
    async fn find_master(&self) -> Result<Option<Controller>, CatalogError>;

    /// Returns the id assigned by the database.
    async fn create(&self, controller: &NewController) -> Result<i32, CatalogError>;

    async fn delete(&self, id: i32) -> Result<bool, CatalogError>;
}

/// Repository for async job records.
pub trait TaskRepository: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<Task>, CatalogError>;
    async fn list_by_user(&self, username: &str) -> Result<Vec<Task>, CatalogError>;
    async fn create(&self, task: &Task) -> Result<(), CatalogError>;

    /// Update status fields in place. Returns `true` if the task exists.
    async fn update_progress(
        &self,
        id: &str,
        status: &str,
        message: Option<&str>,
        progress: i32,
    ) -> Result<bool, CatalogError>;
}
