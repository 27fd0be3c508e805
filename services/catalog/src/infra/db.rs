use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database,
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait, sea_query::OnConflict,
};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use netlab_catalog_migration::Migrator;
use netlab_catalog_schema::{
    active_interfaces, active_labs, active_nodes, controllers, labs, repositories, roles,
    roles_to_users, tasks, users,
};

use crate::config::CatalogConfig;
use crate::domain::repository::{
    ActiveInterfaceRepository, ActiveLabRepository, ActiveNodeRepository, ControllerRepository,
    LabRepository, RoleRepository, SourceRepository, TaskRepository, UserRepository,
};
use crate::domain::types::{
    ActiveInterface, ActiveLab, ActiveNode, Controller, Lab, NewController, Repository, Role,
    Task, User,
};
use crate::error::{CatalogError, db_err, txn_err};

/// Open the connection pool and, when enabled, bring the schema up to date.
pub async fn connect(config: &CatalogConfig) -> Result<DatabaseConnection, CatalogError> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(config.sql_logging);
    let db = Database::connect(options)
        .await
        .map_err(db_err("connect to database"))?;
    debug!(
        max_connections = config.max_connections,
        "connected to database"
    );

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .map_err(db_err("apply catalog migrations"))?;
        info!("catalog migrations applied");
    }
    Ok(db)
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, CatalogError> {
        let model = users::Entity::find_by_id(username.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err("find user by username"))?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CatalogError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err("find user by email"))?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, CatalogError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Username)
            .all(&self.db)
            .await
            .map_err(db_err("list users"))?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &User) -> Result<(), CatalogError> {
        users::ActiveModel {
            username: Set(user.username.clone()),
            password: Set(user.password.clone()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            labels: Set(user.labels),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create user"))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<bool, CatalogError> {
        let result = users::Entity::update_many()
            .set(users::ActiveModel {
                password: Set(user.password.clone()),
                name: Set(user.name.clone()),
                email: Set(user.email.clone()),
                labels: Set(user.labels),
                ..Default::default()
            })
            .filter(users::Column::Username.eq(user.username.as_str()))
            .exec(&self.db)
            .await
            .map_err(db_err("update user"))?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, username: &str) -> Result<bool, CatalogError> {
        self.db
            .transaction::<_, bool, DbErr>(|txn| {
                let username = username.to_owned();
                Box::pin(async move {
                    roles_to_users::Entity::delete_many()
                        .filter(roles_to_users::Column::Username.eq(username.as_str()))
                        .exec(txn)
                        .await?;
                    let result = users::Entity::delete_by_id(username).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .map_err(txn_err("delete user"))
    }

    async fn list_roles(&self, username: &str) -> Result<Vec<Role>, CatalogError> {
        let models = roles::Entity::find()
            .inner_join(users::Entity)
            .filter(users::Column::Username.eq(username))
            .order_by_asc(roles::Column::Role)
            .all(&self.db)
            .await
            .map_err(db_err("list roles of user"))?;
        Ok(models.into_iter().map(role_from_model).collect())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        username: model.username,
        password: model.password,
        name: model.name,
        email: model.email,
        labels: model.labels,
    }
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn find(&self, role: &str) -> Result<Option<Role>, CatalogError> {
        let model = roles::Entity::find_by_id(role.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err("find role"))?;
        Ok(model.map(role_from_model))
    }

    async fn list(&self) -> Result<Vec<Role>, CatalogError> {
        let models = roles::Entity::find()
            .order_by_asc(roles::Column::Role)
            .all(&self.db)
            .await
            .map_err(db_err("list roles"))?;
        Ok(models.into_iter().map(role_from_model).collect())
    }

    async fn create(&self, role: &Role) -> Result<(), CatalogError> {
        roles::ActiveModel {
            role: Set(role.role.clone()),
            access_to: Set(role.access_to.clone()),
            can_write: Set(role.can_write),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create role"))?;
        Ok(())
    }

    async fn delete(&self, role: &str) -> Result<bool, CatalogError> {
        self.db
            .transaction::<_, bool, DbErr>(|txn| {
                let role = role.to_owned();
                Box::pin(async move {
                    roles_to_users::Entity::delete_many()
                        .filter(roles_to_users::Column::Role.eq(role.as_str()))
                        .exec(txn)
                        .await?;
                    let result = roles::Entity::delete_by_id(role).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .map_err(txn_err("delete role"))
    }

    async fn list_users(&self, role: &str) -> Result<Vec<User>, CatalogError> {
        let models = users::Entity::find()
            .inner_join(roles::Entity)
            .filter(roles::Column::Role.eq(role))
            .order_by_asc(users::Column::Username)
            .all(&self.db)
            .await
            .map_err(db_err("list users of role"))?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn grant(&self, role: &str, username: &str) -> Result<(), CatalogError> {
        roles_to_users::ActiveModel {
            role: Set(role.to_owned()),
            username: Set(username.to_owned()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("grant role"))?;
        Ok(())
    }

    async fn revoke(&self, role: &str, username: &str) -> Result<bool, CatalogError> {
        let result = roles_to_users::Entity::delete_many()
            .filter(roles_to_users::Column::Role.eq(role))
            .filter(roles_to_users::Column::Username.eq(username))
            .exec(&self.db)
            .await
            .map_err(db_err("revoke role"))?;
        Ok(result.rows_affected > 0)
    }
}

fn role_from_model(model: roles::Model) -> Role {
    Role {
        role: model.role,
        access_to: model.access_to,
        can_write: model.can_write,
    }
}

// ── Source repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSourceRepository {
    pub db: DatabaseConnection,
}

impl SourceRepository for DbSourceRepository {
    async fn find(&self, repository: &str) -> Result<Option<Repository>, CatalogError> {
        let model = repositories::Entity::find_by_id(repository.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err("find repository"))?;
        Ok(model.map(repository_from_model))
    }

    async fn list(&self) -> Result<Vec<Repository>, CatalogError> {
        let models = repositories::Entity::find()
            .order_by_asc(repositories::Column::Repository)
            .all(&self.db)
            .await
            .map_err(db_err("list repositories"))?;
        Ok(models.into_iter().map(repository_from_model).collect())
    }

    async fn upsert(&self, repository: &Repository) -> Result<(), CatalogError> {
        let model = repositories::ActiveModel {
            repository: Set(repository.repository.clone()),
            url: Set(repository.url.clone()),
            username: Set(repository.username.clone()),
            password: Set(repository.password.clone()),
        };
        repositories::Entity::insert(model)
            .on_conflict(
                OnConflict::column(repositories::Column::Repository)
                    .update_columns([
                        repositories::Column::Url,
                        repositories::Column::Username,
                        repositories::Column::Password,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err("upsert repository"))?;
        Ok(())
    }

    async fn delete(&self, repository: &str) -> Result<bool, CatalogError> {
        let result = repositories::Entity::delete_by_id(repository.to_owned())
            .exec(&self.db)
            .await
            .map_err(db_err("delete repository"))?;
        Ok(result.rows_affected > 0)
    }
}

fn repository_from_model(model: repositories::Model) -> Repository {
    Repository {
        repository: model.repository,
        url: model.url,
        username: model.username,
        password: model.password,
    }
}

// ── Lab repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLabRepository {
    pub db: DatabaseConnection,
}

impl LabRepository for DbLabRepository {
    async fn find(&self, id: &str) -> Result<Option<Lab>, CatalogError> {
        let model = labs::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err("find lab"))?;
        Ok(model.map(lab_from_model))
    }

    async fn list(&self) -> Result<Vec<Lab>, CatalogError> {
        let models = labs::Entity::find()
            .order_by_asc(labs::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("list labs"))?;
        Ok(models.into_iter().map(lab_from_model).collect())
    }

    async fn list_by_repository(&self, repository: &str) -> Result<Vec<Lab>, CatalogError> {
        let models = labs::Entity::find()
            .filter(labs::Column::Repository.eq(repository))
            .order_by_asc(labs::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("list labs by repository"))?;
        Ok(models.into_iter().map(lab_from_model).collect())
    }

    async fn upsert(&self, lab: &Lab) -> Result<(), CatalogError> {
        let model = labs::ActiveModel {
            id: Set(lab.id.clone()),
            author: Set(lab.author.clone()),
            name: Set(lab.name.clone()),
            version: Set(lab.version),
            json: Set(lab.json.clone()),
            repository: Set(lab.repository.clone()),
        };
        labs::Entity::insert(model)
            .on_conflict(
                OnConflict::column(labs::Column::Id)
                    .update_columns([
                        labs::Column::Author,
                        labs::Column::Name,
                        labs::Column::Version,
                        labs::Column::Json,
                        labs::Column::Repository,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err("upsert lab"))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, CatalogError> {
        let result = labs::Entity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(db_err("delete lab"))?;
        Ok(result.rows_affected > 0)
    }
}

fn lab_from_model(model: labs::Model) -> Lab {
    Lab {
        id: model.id,
        author: model.author,
        name: model.name,
        version: model.version,
        json: model.json,
        repository: model.repository,
    }
}

// ── Active lab repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActiveLabRepository {
    pub db: DatabaseConnection,
}

impl ActiveLabRepository for DbActiveLabRepository {
    async fn find(&self, id: &str, username: &str) -> Result<Option<ActiveLab>, CatalogError> {
        let model = active_labs::Entity::find_by_id((id.to_owned(), username.to_owned()))
            .one(&self.db)
            .await
            .map_err(db_err("find active lab"))?;
        Ok(model.map(active_lab_from_model))
    }

    async fn list_by_user(&self, username: &str) -> Result<Vec<ActiveLab>, CatalogError> {
        let models = active_labs::Entity::find()
            .filter(active_labs::Column::Username.eq(username))
            .order_by_asc(active_labs::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("list active labs by user"))?;
        Ok(models.into_iter().map(active_lab_from_model).collect())
    }

    async fn create(
        &self,
        lab: &ActiveLab,
        nodes: &[ActiveNode],
        interfaces: &[ActiveInterface],
    ) -> Result<(), CatalogError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                let lab = lab.clone();
                let nodes = nodes.to_vec();
                let interfaces = interfaces.to_vec();
                Box::pin(async move {
                    active_labs::ActiveModel {
                        id: Set(lab.id.clone()),
                        username: Set(lab.username.clone()),
                        author: Set(lab.author.clone()),
                        name: Set(lab.name.clone()),
                        version: Set(lab.version),
                        json: Set(lab.json.clone()),
                        repository: Set(lab.repository.clone()),
                    }
                    .insert(txn)
                    .await?;
                    insert_nodes(txn, &nodes).await?;
                    insert_interfaces(txn, &interfaces).await?;
                    Ok(())
                })
            })
            .await
            .map_err(txn_err("create active lab"))?;
        info!(
            lab_id = %lab.id,
            username = %lab.username,
            nodes = nodes.len(),
            interfaces = interfaces.len(),
            "active lab created"
        );
        Ok(())
    }

    async fn delete(&self, id: &str, username: &str) -> Result<bool, CatalogError> {
        let (existed, nodes, interfaces) = self
            .db
            .transaction::<_, (bool, u64, u64), DbErr>(|txn| {
                let id = id.to_owned();
                let username = username.to_owned();
                Box::pin(async move {
                    let labels: Vec<i32> = active_nodes::Entity::find()
                        .select_only()
                        .column(active_nodes::Column::Label)
                        .filter(active_nodes::Column::LabId.eq(id.as_str()))
                        .filter(active_nodes::Column::Username.eq(username.as_str()))
                        .into_tuple()
                        .all(txn)
                        .await?;
                    let interfaces = delete_interfaces_of(txn, &labels).await?;
                    let nodes = active_nodes::Entity::delete_many()
                        .filter(active_nodes::Column::LabId.eq(id.as_str()))
                        .filter(active_nodes::Column::Username.eq(username.as_str()))
                        .exec(txn)
                        .await?
                        .rows_affected;
                    let lab = active_labs::Entity::delete_by_id((id, username))
                        .exec(txn)
                        .await?;
                    Ok((lab.rows_affected > 0, nodes, interfaces))
                })
            })
            .await
            .map_err(txn_err("delete active lab"))?;
        if existed {
            info!(lab_id = id, username, nodes, interfaces, "active lab stopped");
        }
        Ok(existed)
    }
}

async fn insert_nodes(txn: &DatabaseTransaction, nodes: &[ActiveNode]) -> Result<(), DbErr> {
    if nodes.is_empty() {
        return Ok(());
    }
    active_nodes::Entity::insert_many(nodes.iter().map(|node| active_nodes::ActiveModel {
        label: Set(node.label),
        username: Set(node.username.clone()),
        lab_id: Set(node.lab_id.clone()),
        node_id: Set(node.node_id),
        state: Set(node.state.clone()),
    }))
    .exec_without_returning(txn)
    .await?;
    Ok(())
}

async fn insert_interfaces(
    txn: &DatabaseTransaction,
    interfaces: &[ActiveInterface],
) -> Result<(), DbErr> {
    if interfaces.is_empty() {
        return Ok(());
    }
    active_interfaces::Entity::insert_many(interfaces.iter().map(|iface| {
        active_interfaces::ActiveModel {
            id: Set(iface.id),
            label: Set(iface.label),
            dst_label: Set(iface.dst_label),
            dst_if: Set(iface.dst_if),
        }
    }))
    .exec_without_returning(txn)
    .await?;
    Ok(())
}

async fn delete_interfaces_of(txn: &DatabaseTransaction, labels: &[i32]) -> Result<u64, DbErr> {
    if labels.is_empty() {
        return Ok(0);
    }
    let result = active_interfaces::Entity::delete_many()
        .filter(active_interfaces::Column::Label.is_in(labels.iter().copied()))
        .exec(txn)
        .await?;
    Ok(result.rows_affected)
}

fn active_lab_from_model(model: active_labs::Model) -> ActiveLab {
    ActiveLab {
        id: model.id,
        username: model.username,
        author: model.author,
        name: model.name,
        version: model.version,
        json: model.json,
        repository: model.repository,
    }
}

// ── Active node repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActiveNodeRepository {
    pub db: DatabaseConnection,
}

impl ActiveNodeRepository for DbActiveNodeRepository {
    async fn find(&self, label: i32) -> Result<Option<ActiveNode>, CatalogError> {
        let model = active_nodes::Entity::find_by_id(label)
            .one(&self.db)
            .await
            .map_err(db_err("find active node"))?;
        Ok(model.map(active_node_from_model))
    }

    async fn list_by_lab(
        &self,
        lab_id: &str,
        username: &str,
    ) -> Result<Vec<ActiveNode>, CatalogError> {
        let models = active_nodes::Entity::find()
            .filter(active_nodes::Column::LabId.eq(lab_id))
            .filter(active_nodes::Column::Username.eq(username))
            .order_by_asc(active_nodes::Column::Label)
            .all(&self.db)
            .await
            .map_err(db_err("list active nodes by lab"))?;
        Ok(models.into_iter().map(active_node_from_model).collect())
    }

    async fn update_state(&self, label: i32, state: &str) -> Result<bool, CatalogError> {
        let result = active_nodes::Entity::update_many()
            .set(active_nodes::ActiveModel {
                state: Set(Some(state.to_owned())),
                ..Default::default()
            })
            .filter(active_nodes::Column::Label.eq(label))
            .exec(&self.db)
            .await
            .map_err(db_err("update active node state"))?;
        Ok(result.rows_affected > 0)
    }

    async fn count_by_user(&self, username: &str) -> Result<u64, CatalogError> {
        active_nodes::Entity::find()
            .filter(active_nodes::Column::Username.eq(username))
            .count(&self.db)
            .await
            .map_err(db_err("count active nodes by user"))
    }

    async fn delete(&self, label: i32) -> Result<bool, CatalogError> {
        self.db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    delete_interfaces_of(txn, &[label]).await?;
                    let result = active_nodes::Entity::delete_by_id(label).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .map_err(txn_err("delete active node"))
    }
}

fn active_node_from_model(model: active_nodes::Model) -> ActiveNode {
    ActiveNode {
        label: model.label,
        username: model.username,
        lab_id: model.lab_id,
        node_id: model.node_id,
        state: model.state,
    }
}

// ── Active interface repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActiveInterfaceRepository {
    pub db: DatabaseConnection,
}

impl ActiveInterfaceRepository for DbActiveInterfaceRepository {
    async fn list_by_node(&self, label: i32) -> Result<Vec<ActiveInterface>, CatalogError> {
        let models = active_interfaces::Entity::find()
            .filter(active_interfaces::Column::Label.eq(label))
            .order_by_asc(active_interfaces::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("list active interfaces by node"))?;
        Ok(models.into_iter().map(active_interface_from_model).collect())
    }

    async fn set_peer(
        &self,
        label: i32,
        id: i32,
        dst_label: Option<i32>,
        dst_if: Option<i32>,
    ) -> Result<bool, CatalogError> {
        let result = active_interfaces::Entity::update_many()
            .set(active_interfaces::ActiveModel {
                dst_label: Set(dst_label),
                dst_if: Set(dst_if),
                ..Default::default()
            })
            .filter(active_interfaces::Column::Label.eq(label))
            .filter(active_interfaces::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err("set active interface peer"))?;
        Ok(result.rows_affected > 0)
    }
}

fn active_interface_from_model(model: active_interfaces::Model) -> ActiveInterface {
    ActiveInterface {
        id: model.id,
        label: model.label,
        dst_label: model.dst_label,
        dst_if: model.dst_if,
    }
}

// ── Controller repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbControllerRepository {
    pub db: DatabaseConnection,
}

impl ControllerRepository for DbControllerRepository {
    async fn find(&self, id: i32) -> Result<Option<Controller>, CatalogError> {
        let model = controllers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("find controller"))?;
        Ok(model.map(controller_from_model))
    }

    async fn list(&self) -> Result<Vec<Controller>, CatalogError> {
        let models = controllers::Entity::find()
            .order_by_asc(controllers::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("list controllers"))?;
        Ok(models.into_iter().map(controller_from_model).collect())
    }

    async fn find_master(&self) -> Result<Option<Controller>, CatalogError> {
        let model = controllers::Entity::find()
            .filter(controllers::Column::Master.eq(true))
            .order_by_asc(controllers::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err("find master controller"))?;
        Ok(model.map(controller_from_model))
    }

    async fn create(&self, controller: &NewController) -> Result<i32, CatalogError> {
        let result = controllers::Entity::insert(controllers::ActiveModel {
            inside_ip: Set(controller.inside_ip.clone()),
            outside_ip: Set(controller.outside_ip.clone()),
            master: Set(controller.master),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .map_err(db_err("create controller"))?;
        Ok(result.last_insert_id)
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let result = controllers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("delete controller"))?;
        Ok(result.rows_affected > 0)
    }
}

fn controller_from_model(model: controllers::Model) -> Controller {
    Controller {
        id: model.id,
        inside_ip: model.inside_ip,
        outside_ip: model.outside_ip,
        master: model.master,
    }
}

// ── Task repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTaskRepository {
    pub db: DatabaseConnection,
}

impl TaskRepository for DbTaskRepository {
    async fn find(&self, id: &str) -> Result<Option<Task>, CatalogError> {
        let model = tasks::Entity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err("find task"))?;
        Ok(model.map(task_from_model))
    }

    async fn list_by_user(&self, username: &str) -> Result<Vec<Task>, CatalogError> {
        let models = tasks::Entity::find()
            .filter(tasks::Column::Username.eq(username))
            .order_by_asc(tasks::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("list tasks by user"))?;
        Ok(models.into_iter().map(task_from_model).collect())
    }

    async fn create(&self, task: &Task) -> Result<(), CatalogError> {
        tasks::ActiveModel {
            id: Set(task.id.clone()),
            status: Set(task.status.clone()),
            message: Set(task.message.clone()),
            progress: Set(task.progress),
            username: Set(task.username.clone()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err("create task"))?;
        Ok(())
    }

    async fn update_progress(
        &self,
        id: &str,
        status: &str,
        message: Option<&str>,
        progress: i32,
    ) -> Result<bool, CatalogError> {
        let result = tasks::Entity::update_many()
            .set(tasks::ActiveModel {
                status: Set(Some(status.to_owned())),
                message: Set(message.map(str::to_owned)),
                progress: Set(Some(progress)),
                ..Default::default()
            })
            .filter(tasks::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err("update task progress"))?;
        Ok(result.rows_affected > 0)
    }
}

fn task_from_model(model: tasks::Model) -> Task {
    Task {
        id: model.id,
        status: model.status,
        message: model.message,
        progress: model.progress,
        username: model.username,
    }
}
