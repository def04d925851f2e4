use chrono::{DateTime, Utc};
use fusion_models::content::{Role, Service, ServiceIcon, TeamMember};
use fusion_persistence_contracts::{
    roles::RoleRepository, services::ServiceRepository, team_members::TeamMemberRepository,
    Database, Transaction,
};
use fusion_persistence_postgres::{
    roles::PostgresRoleRepository, services::PostgresServiceRepository,
    team_members::PostgresTeamMemberRepository, PostgresDatabase, PostgresDatabaseConfig,
};
use uuid::Uuid;

pub type Db = PostgresDatabase;

pub const UNKNOWN_ID: Uuid = Uuid::from_u128(0xdead_beef);

pub async fn setup() -> Db {
    let db = setup_clean().await;

    db.run_migrations(None).await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();

    for role in roles() {
        PostgresRoleRepository.create(&mut txn, &role).await.unwrap();
    }
    for service in services() {
        PostgresServiceRepository
            .create(&mut txn, &service)
            .await
            .unwrap();
    }
    for member in team_members() {
        PostgresTeamMemberRepository
            .create(&mut txn, &member)
            .await
            .unwrap();
    }

    txn.commit().await.unwrap();

    db
}

pub async fn setup_clean() -> Db {
    let config = fusion_config::load().unwrap();

    let db = Db::connect(&PostgresDatabaseConfig {
        url: config.database.url,
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: config.database.acquire_timeout.into(),
        idle_timeout: config.database.idle_timeout.map(Into::into),
        max_lifetime: config.database.max_lifetime.map(Into::into),
    })
    .await
    .unwrap();

    db.reset().await.unwrap();
    db
}

pub fn roles() -> Vec<Role> {
    vec![designer(), developer()]
}

pub fn designer() -> Role {
    Role {
        id: Uuid::from_u128(0x11).into(),
        title: "Designer".to_owned().try_into().unwrap(),
        active: true,
        created: ts(8),
        updated: ts(8),
    }
}

pub fn developer() -> Role {
    Role {
        id: Uuid::from_u128(0x12).into(),
        title: "Desenvolvedor".to_owned().try_into().unwrap(),
        active: false,
        created: ts(9),
        updated: ts(9),
    }
}

pub fn services() -> Vec<Service> {
    vec![consultoria(), marketing(), desenvolvimento()]
}

pub fn consultoria() -> Service {
    Service {
        id: Uuid::from_u128(0x21).into(),
        name: "Consultoria".to_owned().try_into().unwrap(),
        description: "Consultoria especializada".to_owned().try_into().unwrap(),
        icon: ServiceIcon::Cog,
        active: true,
        created: ts(10),
        updated: ts(10),
    }
}

pub fn marketing() -> Service {
    Service {
        id: Uuid::from_u128(0x22).into(),
        name: "Marketing".to_owned().try_into().unwrap(),
        description: "Campanhas de marketing digital"
            .to_owned()
            .try_into()
            .unwrap(),
        icon: ServiceIcon::StatsUp,
        active: false,
        created: ts(11),
        updated: ts(11),
    }
}

pub fn desenvolvimento() -> Service {
    Service {
        id: Uuid::from_u128(0x23).into(),
        name: "Desenvolvimento".to_owned().try_into().unwrap(),
        description: "Aplicações web sob medida".to_owned().try_into().unwrap(),
        icon: ServiceIcon::Rocket,
        active: true,
        created: ts(12),
        updated: ts(12),
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![ana(), bruno(), carla()]
}

pub fn ana() -> TeamMember {
    TeamMember {
        id: Uuid::from_u128(0x31).into(),
        name: "Ana Souza".to_owned().try_into().unwrap(),
        role_id: designer().id,
        bio: "Cuida do design dos projetos.".to_owned().try_into().unwrap(),
        image_url: Some("https://fusion.example/ana.jpg".parse().unwrap()),
        facebook: "https://facebook.com/ana".to_owned().try_into().unwrap(),
        twitter: Default::default(),
        instagram: Default::default(),
        active: true,
        created: ts(13),
        updated: ts(13),
    }
}

pub fn bruno() -> TeamMember {
    TeamMember {
        id: Uuid::from_u128(0x32).into(),
        name: "Bruno Lima".to_owned().try_into().unwrap(),
        role_id: developer().id,
        bio: "Escreve o código que mantém tudo no ar."
            .to_owned()
            .try_into()
            .unwrap(),
        image_url: None,
        facebook: Default::default(),
        twitter: Default::default(),
        instagram: Default::default(),
        active: true,
        created: ts(14),
        updated: ts(14),
    }
}

pub fn carla() -> TeamMember {
    TeamMember {
        id: Uuid::from_u128(0x33).into(),
        name: "Carla Mendes".to_owned().try_into().unwrap(),
        role_id: designer().id,
        bio: "Ex-integrante, mantida para o histórico."
            .to_owned()
            .try_into()
            .unwrap(),
        image_url: None,
        facebook: Default::default(),
        twitter: Default::default(),
        instagram: Default::default(),
        active: false,
        created: ts(15),
        updated: ts(15),
    }
}

pub fn ts(hour: u32) -> DateTime<Utc> {
    format!("2024-03-01T{hour:02}:00:00Z").parse().unwrap()
}
