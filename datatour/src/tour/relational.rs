//! Declared tables over SQLite: create, insert, commit, select.

use std::io::Write;

use datatour_store::{
    ColumnDef, Engine, EngineOptions, MetaData, Row, SqlType, Table, Value,
};

use crate::config::TourConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct RelationalReport {
    pub users_inserted: usize,
    pub posts_inserted: usize,
    pub users: Vec<Row>,
    pub posts: Vec<Row>,
}

/// `users(id, name, age, city)` and `posts(id, title, content, user_id)`.
pub fn schema() -> Result<MetaData> {
    let mut metadata = MetaData::new();
    metadata.add_table(Table::new(
        "users",
        vec![
            ColumnDef::new("id", SqlType::Integer).primary_key(),
            ColumnDef::new("name", SqlType::Text),
            ColumnDef::new("age", SqlType::Integer),
            ColumnDef::new("city", SqlType::Text),
        ],
    ))?;
    metadata.add_table(Table::new(
        "posts",
        vec![
            ColumnDef::new("id", SqlType::Integer).primary_key(),
            ColumnDef::new("title", SqlType::Text),
            ColumnDef::new("content", SqlType::Text),
            ColumnDef::new("user_id", SqlType::Integer).references("users", "id"),
        ],
    ))?;
    Ok(metadata)
}

pub fn run(config: &TourConfig, out: &mut impl Write) -> Result<RelationalReport> {
    tracing::debug!("relational step");

    let engine = Engine::open(
        &config.database,
        EngineOptions {
            echo: config.echo_sql,
            foreign_keys: true,
        },
    )?;
    let metadata = schema()?;
    metadata.create_all(&engine)?;
    let users = metadata.table("users")?;
    let posts = metadata.table("posts")?;

    let mut conn = engine.connect()?;

    let users_inserted = conn.execute_insert(
        &users
            .insert()
            .value("name", Value::Text("John".into()))
            .value("age", 20_i64)
            .value("city", Value::Text("New York".into())),
    )?;
    writeln!(out, "{users_inserted}")?;

    let posts_inserted = conn.execute_insert(
        &posts
            .insert()
            .value("title", Value::Text("Post 1".into()))
            .value("content", Value::Text("Content 1".into()))
            .value("user_id", 1_i64),
    )?;
    writeln!(out, "{posts_inserted}")?;

    conn.commit()?;

    let user_rows = conn.execute_select(&users.select())?;
    for row in &user_rows {
        writeln!(out, "{row}")?;
    }
    let post_rows = conn.execute_select(&posts.select())?;
    for row in &post_rows {
        writeln!(out, "{row}")?;
    }

    Ok(RelationalReport {
        users_inserted,
        posts_inserted,
        users: user_rows,
        posts: post_rows,
    })
}
