//! Status lifecycle shared by every entity: active-only reads, guarded
//! single-record transitions and unguarded bulk flips.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use super::{ServiceError, ServiceResult};
use crate::db::Repository;
use crate::messages::MessageKey;
use crate::models::{RecordStatus, StatusTracked};

/// Message keys an entity reports through the lifecycle.
#[derive(Debug, Clone, Copy)]
pub struct EntityMessages {
    pub not_found: MessageKey,
    pub already_deleted: MessageKey,
    pub already_active: MessageKey,
}

/// Keep the record only if it exists and is ACTIVE.
pub(crate) fn require_active<T: StatusTracked>(
    entity: Option<T>,
    messages: &EntityMessages,
) -> ServiceResult<T> {
    entity
        .filter(|e| e.is_active())
        .ok_or(ServiceError::NotFound(messages.not_found))
}

pub(crate) fn retain_active<T: StatusTracked>(mut entities: Vec<T>) -> Vec<T> {
    entities.retain(|e| e.is_active());
    entities
}

pub(crate) fn find_active<R>(
    conn: &Connection,
    id: i64,
    messages: &EntityMessages,
) -> ServiceResult<R::Entity>
where
    R: Repository,
    R::Entity: StatusTracked,
{
    require_active(R::find_by_id(conn, id)?, messages)
}

pub(crate) fn list_with_status<R: Repository>(
    conn: &Connection,
    status: RecordStatus,
) -> ServiceResult<Vec<R::Entity>> {
    Ok(R::find_by_record_status(conn, status)?)
}

/// ACTIVE -> DELETED for one record. The status read and the flip share an
/// IMMEDIATE transaction: of two concurrent deletes, the second waits for the
/// first to commit and then fails with IllegalStatusTransition.
pub(crate) fn soft_delete<R: Repository>(
    conn: &Connection,
    id: i64,
    messages: &EntityMessages,
) -> ServiceResult<()> {
    transition::<R>(conn, id, RecordStatus::Deleted, messages)
}

/// DELETED -> ACTIVE for one record.
pub(crate) fn restore<R: Repository>(
    conn: &Connection,
    id: i64,
    messages: &EntityMessages,
) -> ServiceResult<()> {
    transition::<R>(conn, id, RecordStatus::Active, messages)
}

fn transition<R: Repository>(
    conn: &Connection,
    id: i64,
    target: RecordStatus,
    messages: &EntityMessages,
) -> ServiceResult<()> {
    let tx = write_transaction(conn)?;

    match R::find_record_status(&tx, id)? {
        None => return Err(ServiceError::NotFound(messages.not_found)),
        Some(current) if current == target => {
            return Err(ServiceError::IllegalStatusTransition(match current {
                RecordStatus::Deleted => messages.already_deleted,
                RecordStatus::Active => messages.already_active,
            }));
        }
        Some(_) => {}
    }

    match target {
        RecordStatus::Deleted => R::soft_delete_by_id(&tx, id)?,
        RecordStatus::Active => R::restore_by_id(&tx, id)?,
    };
    tx.commit()?;

    tracing::info!(entity = R::TABLE, id, status = %target, "Record status changed");
    Ok(())
}

/// Every row of the table to DELETED, whatever its current status.
pub(crate) fn soft_delete_all<R: Repository>(conn: &Connection) -> ServiceResult<usize> {
    bulk_transition::<R>(conn, RecordStatus::Deleted)
}

/// Every row of the table to ACTIVE, whatever its current status.
pub(crate) fn restore_all<R: Repository>(conn: &Connection) -> ServiceResult<usize> {
    bulk_transition::<R>(conn, RecordStatus::Active)
}

fn bulk_transition<R: Repository>(conn: &Connection, target: RecordStatus) -> ServiceResult<usize> {
    let tx = write_transaction(conn)?;
    let changed = match target {
        RecordStatus::Deleted => R::soft_delete_all(&tx)?,
        RecordStatus::Active => R::restore_all(&tx)?,
    };
    tx.commit()?;

    tracing::info!(entity = R::TABLE, changed, status = %target, "Bulk status change");
    Ok(changed)
}

/// IMMEDIATE: the write lock is taken by `BEGIN`, before the status read.
fn write_transaction(conn: &Connection) -> rusqlite::Result<Transaction<'_>> {
    Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::tests::{make_medico, test_db};
    use crate::db::{open_database, MedicoRepository};
    use crate::models::Medico;
    use std::time::Duration;

    const MESSAGES: EntityMessages = EntityMessages {
        not_found: "nf",
        already_deleted: "del",
        already_active: "act",
    };

    #[test]
    fn require_active_rejects_missing_and_deleted() {
        let conn = test_db();
        let id = make_medico(&conn, "Mario", "Verdi", "a@studio.it");

        assert!(find_active::<MedicoRepository>(&conn, id, &MESSAGES).is_ok());
        assert!(matches!(
            find_active::<MedicoRepository>(&conn, id + 1, &MESSAGES),
            Err(ServiceError::NotFound("nf"))
        ));

        MedicoRepository::soft_delete_by_id(&conn, id).unwrap();
        assert!(matches!(
            find_active::<MedicoRepository>(&conn, id, &MESSAGES),
            Err(ServiceError::NotFound("nf"))
        ));
    }

    #[test]
    fn transition_reports_the_current_status() {
        let conn = test_db();
        let id = make_medico(&conn, "Mario", "Verdi", "a@studio.it");

        assert!(matches!(
            restore::<MedicoRepository>(&conn, id, &MESSAGES),
            Err(ServiceError::IllegalStatusTransition("act"))
        ));
        soft_delete::<MedicoRepository>(&conn, id, &MESSAGES).unwrap();
        assert!(matches!(
            soft_delete::<MedicoRepository>(&conn, id, &MESSAGES),
            Err(ServiceError::IllegalStatusTransition("del"))
        ));
    }

    #[test]
    fn failed_transition_leaves_status_untouched() {
        let conn = test_db();
        let id = make_medico(&conn, "Mario", "Verdi", "a@studio.it");
        let _ = restore::<MedicoRepository>(&conn, id, &MESSAGES);
        assert_eq!(
            MedicoRepository::find_record_status(&conn, id).unwrap(),
            Some(RecordStatus::Active)
        );
    }

    #[test]
    fn retain_active_drops_deleted() {
        let conn = test_db();
        let a = make_medico(&conn, "Mario", "Verdi", "a@studio.it");
        let b = make_medico(&conn, "Luca", "Gialli", "b@studio.it");
        MedicoRepository::soft_delete_by_id(&conn, b).unwrap();

        let all: Vec<Medico> = MedicoRepository::fetch_all(&conn, "ORDER BY m.id", []).unwrap();
        let ids: Vec<i64> = retain_active(all).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![a]);
    }

    #[test]
    fn bulk_counts_every_row() {
        let conn = test_db();
        make_medico(&conn, "Mario", "Verdi", "a@studio.it");
        make_medico(&conn, "Luca", "Gialli", "b@studio.it");
        assert_eq!(soft_delete_all::<MedicoRepository>(&conn).unwrap(), 2);
        assert_eq!(soft_delete_all::<MedicoRepository>(&conn).unwrap(), 2);
        assert!(list_with_status::<MedicoRepository>(&conn, RecordStatus::Active)
            .unwrap()
            .is_empty());
        assert_eq!(restore_all::<MedicoRepository>(&conn).unwrap(), 2);
    }

    #[test]
    fn concurrent_deletes_end_in_a_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.db");
        let first = open_database(&path).unwrap();
        let id = make_medico(&first, "Mario", "Verdi", "a@studio.it");

        let tx = write_transaction(&first).unwrap();
        let racer = {
            let path = path.clone();
            std::thread::spawn(move || {
                let second = open_database(&path).unwrap();
                soft_delete::<MedicoRepository>(&second, id, &MESSAGES)
            })
        };
        MedicoRepository::soft_delete_by_id(&tx, id).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        tx.commit().unwrap();

        assert!(matches!(
            racer.join().unwrap(),
            Err(ServiceError::IllegalStatusTransition("del"))
        ));
    }
}
