use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use netlab_catalog_schema::{
    active_interfaces, active_labs, active_nodes, controllers, labs, repositories, roles,
    roles_to_users, tasks, users,
};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, db_err};
use crate::infra::db::{
    DbActiveInterfaceRepository, DbActiveLabRepository, DbActiveNodeRepository,
    DbControllerRepository, DbLabRepository, DbRoleRepository, DbSourceRepository,
    DbTaskRepository, DbUserRepository, connect,
};

/// Shared handle to the catalog database. Cheap to clone; every repository
/// borrows the same pool.
#[derive(Clone)]
pub struct Catalog {
    pub db: DatabaseConnection,
}

impl Catalog {
    pub async fn connect(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            db: connect(config).await?,
        })
    }

    pub fn users(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn roles(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn repositories(&self) -> DbSourceRepository {
        DbSourceRepository {
            db: self.db.clone(),
        }
    }

    pub fn labs(&self) -> DbLabRepository {
        DbLabRepository {
            db: self.db.clone(),
        }
    }

    pub fn active_labs(&self) -> DbActiveLabRepository {
        DbActiveLabRepository {
            db: self.db.clone(),
        }
    }

    pub fn active_nodes(&self) -> DbActiveNodeRepository {
        DbActiveNodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn active_interfaces(&self) -> DbActiveInterfaceRepository {
        DbActiveInterfaceRepository {
            db: self.db.clone(),
        }
    }

    pub fn controllers(&self) -> DbControllerRepository {
        DbControllerRepository {
            db: self.db.clone(),
        }
    }

    pub fn tasks(&self) -> DbTaskRepository {
        DbTaskRepository {
            db: self.db.clone(),
        }
    }

    /// Row count of every catalog table, in dependency order.
    pub async fn row_counts(&self) -> Result<Vec<(&'static str, u64)>, CatalogError> {
        let db = &self.db;
        let ctx = "count table rows";
        Ok(vec![
            ("users", users::Entity::find().count(db).await.map_err(db_err(ctx))?),
            ("roles", roles::Entity::find().count(db).await.map_err(db_err(ctx))?),
            (
                "roles_to_users",
                roles_to_users::Entity::find().count(db).await.map_err(db_err(ctx))?,
            ),
            (
                "repositories",
                repositories::Entity::find().count(db).await.map_err(db_err(ctx))?,
            ),
            ("labs", labs::Entity::find().count(db).await.map_err(db_err(ctx))?),
            (
                "active_labs",
                active_labs::Entity::find().count(db).await.map_err(db_err(ctx))?,
            ),
            (
                "active_nodes",
                active_nodes::Entity::find().count(db).await.map_err(db_err(ctx))?,
            ),
            (
                "active_interfaces",
                active_interfaces::Entity::find().count(db).await.map_err(db_err(ctx))?,
            ),
            (
                "controllers",
                controllers::Entity::find().count(db).await.map_err(db_err(ctx))?,
            ),
            ("tasks", tasks::Entity::find().count(db).await.map_err(db_err(ctx))?),
        ])
    }
}
