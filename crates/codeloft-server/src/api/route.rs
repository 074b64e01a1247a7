use actix_web::{Scope, web};

use super::{chat, config, deployment, file, health, project, user};

pub fn routes() -> Scope {
    web::scope("/api")
        .service(health::health)
        .service(user::find_user)
        .service(user::create_user)
        .service(user::update_user)
        .service(user::delete_user)
        .service(project::find_projects_by_user)
        .service(project::find_project)
        .service(project::create_project)
        .service(project::update_project)
        .service(project::delete_project)
        .service(file::find_files)
        .service(file::find_file)
        .service(file::save_file)
        .service(file::delete_file)
        .service(deployment::find_deployments)
        .service(deployment::deploy_project)
        .service(config::find_config)
        .service(config::save_config)
        .service(chat::stream_chat)
}
