use crate::auth::{hash_password, HashCost};
use crate::repository::user_repository::{upsert_user, NewUser};
use crate::repository::{project_repository, settings_repository, Database};
use log::info;
use shared::error::PortalError;
use shared::model::{ProjectRequest, Role, SETTING_COMPANY_NAME, SETTING_CONTACT_EMAIL, SETTING_CONTACT_PHONE, SETTING_TAGLINE};
use zeroize::Zeroize;

pub const DEMO_CLIENT_EMAIL: &str = "cliente@demo.local";

struct DemoUser {
    email: &'static str,
    name: &'static str,
    role: Role,
    password_env: &'static str,
    default_password: &'static str,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser { email: "admin1@demo.local", name: "Admin 1", role: Role::Admin1, password_env: "SEED_ADMIN1_PASSWORD", default_password: "Admin1!123" },
    DemoUser { email: "admin2@demo.local", name: "Admin 2", role: Role::Admin2, password_env: "SEED_ADMIN2_PASSWORD", default_password: "Admin2!123" },
    DemoUser { email: DEMO_CLIENT_EMAIL, name: "Cliente Demo", role: Role::Cliente, password_env: "SEED_CLIENT_PASSWORD", default_password: "Cliente!123" },
];

fn demo_settings() -> Vec<(String, String)> {
    [
        (SETTING_COMPANY_NAME, "Consultoría Nova"),
        (SETTING_TAGLINE, "Estrategia clara, ejecución medible."),
        (SETTING_CONTACT_EMAIL, "hola@consultorianova.example"),
        (SETTING_CONTACT_PHONE, "+1 (000) 000-0000"),
    ].into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn demo_projects() -> Vec<ProjectRequest> {
    vec![
        ProjectRequest {
            title: "Optimización de atención al cliente".to_string(),
            summary: "Rediseño del flujo de tickets, matriz de enrutamiento y escalamiento con enfoque “first-time-right”.".to_string(),
            industry: "Servicios".to_string(),
            owner_name: "Ana Morales".to_string(),
            owner_role: "Consultora Senior · Operaciones".to_string(),
            results: to_strings(&["-22% tiempo de respuesta", "+15% CSAT", "SLA 98%"]),
            bullets: to_strings(&["Mapa as-is / to-be", "KPIs operativos", "Guías y capacitación"]),
            client_email: Some(DEMO_CLIENT_EMAIL.to_string()),
            published: true,
        },
        ProjectRequest {
            title: "Tablero ejecutivo y pronóstico de demanda".to_string(),
            summary: "Tablero de indicadores con modelo de pronóstico y alertas para decisiones semanales de inventario.".to_string(),
            industry: "Retail".to_string(),
            owner_name: "Víctor Herrera".to_string(),
            owner_role: "Consultor · Data & BI".to_string(),
            results: to_strings(&["+11% precisión", "-30% tiempo de reporte", "Adopción 80%"]),
            bullets: to_strings(&["Catálogo de métricas", "Tablero por audiencia", "Entrenamiento"]),
            client_email: Some(DEMO_CLIENT_EMAIL.to_string()),
            published: true,
        },
    ]
}

/// Upserts the demo identities and settings, adds sample projects to an empty store.
pub async fn seed_demo_data(db: &Database, cost: HashCost) -> Result<(), PortalError> {
    seed_demo_data_with_env(db, cost, &|key: &str| std::env::var(key).ok().filter(|v| !v.is_empty())).await
}

pub async fn seed_demo_data_with_env<F>(db: &Database, cost: HashCost, env: &F) -> Result<(), PortalError>
where
    F: Fn(&str) -> Option<String>,
{
    for demo in DEMO_USERS {
        let mut password = env(demo.password_env).unwrap_or_else(|| demo.default_password.to_string());
        let password_hash = hash_password(password.as_bytes(), cost);
        password.zeroize();
        upsert_user(db, NewUser {
            email: demo.email.to_string(),
            name: demo.name.to_string(),
            role: demo.role,
            password_hash: password_hash?,
        }).await?;
        info!("Demo user {} ({})", demo.email, demo.role);
    }

    settings_repository::upsert_settings(db, demo_settings()).await?;

    if project_repository::count(db).await == 0 {
        for project in demo_projects() {
            project_repository::create_project(db, project).await?;
        }
        info!("Sample projects created");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;
    use crate::repository::user_repository::{find_by_email, list_users};

    const FAST: HashCost = HashCost { mem_cost: Some(1024), time_cost: Some(1) };

    #[tokio::test]
    async fn seed_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        let no_env = |_: &str| -> Option<String> { None };
        seed_demo_data_with_env(&db, FAST, &no_env).await.unwrap();
        seed_demo_data_with_env(&db, FAST, &no_env).await.unwrap();
        assert_eq!(list_users(&db, None).await.len(), 3);
        assert_eq!(project_repository::count(&db).await, 2);
        assert_eq!(settings_repository::all_settings(&db).await.len(), 4);
        let admin = find_by_email(&db, "admin1@demo.local").await.unwrap();
        assert!(verify_password(&admin.password_hash, b"Admin1!123"));
        assert_eq!(project_repository::list_for_client(&db, DEMO_CLIENT_EMAIL).await.len(), 2);
    }

    #[tokio::test]
    async fn seed_password_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).await.unwrap();
        let env = |key: &str| (key == "SEED_CLIENT_PASSWORD").then(|| "Otra!Clave9".to_string());
        seed_demo_data_with_env(&db, FAST, &env).await.unwrap();
        let client = find_by_email(&db, DEMO_CLIENT_EMAIL).await.unwrap();
        assert!(verify_password(&client.password_hash, b"Otra!Clave9"));
        assert!(!verify_password(&client.password_hash, b"Cliente!123"));
    }
}
