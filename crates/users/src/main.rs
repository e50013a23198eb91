//! Walks through both user styles and logs what each one does.

use anyhow::Result;

use sample_users::{entity, value_object};

fn main() -> Result<()> {
    sample_observability::init();

    value_object_walkthrough()?;
    entity_walkthrough()?;

    Ok(())
}

fn value_object_walkthrough() -> Result<()> {
    let taro = value_object::User::new("taro", "yamada")?;
    let same = value_object::User::new(taro.first_name(), taro.last_name())?;
    let other = value_object::User::new("hanako", "suzuki")?;

    tracing::info!(
        full_name = %taro.full_name_japanese_style(),
        equal_to_copy = taro == same,
        equal_to_other = taro == other,
        "value object compared on every field"
    );

    if let Err(err) = value_object::User::new("tst", "tset") {
        tracing::info!(error = %err, "value object rejected at construction");
    }

    Ok(())
}

fn entity_walkthrough() -> Result<()> {
    let id = entity::UserId::new("abc", 1)?;
    let mut user = entity::User::new(id, "taro", "yamada")?;
    let namesake = entity::User::new(entity::UserId::new("abc", 2)?, "taro", "yamada")?;
    let snapshot = user.clone();

    user.set_last_name("tanaka")?;

    tracing::info!(
        user_id = %user.user_id(),
        same_entity_after_rename = user == snapshot,
        same_entity_as_namesake = user == namesake,
        "entity compared on identity only"
    );

    if let Err(err) = user.set_first_name("ab") {
        tracing::info!(
            error = %err,
            first_name = user.first_name(),
            "rename rejected, entity unchanged"
        );
    }

    if let Err(err) = entity::UserId::new("ab", 1) {
        tracing::info!(error = %err, "user id rejected at construction");
    }

    Ok(())
}
