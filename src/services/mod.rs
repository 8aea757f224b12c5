//! Business rules over the repositories.
//!
//! Every service is built over the request's connection and hands back
//! transfer shapes. Visibility is status-gated: reads only ever see ACTIVE
//! records, and single-record delete/restore refuse a transition to the
//! status the record already has. Bulk delete/restore are unguarded.

mod lifecycle;
pub mod medico;
pub mod paziente;
pub mod prenotazione;
pub mod segretario;

pub use lifecycle::EntityMessages;
pub use medico::MedicoService;
pub use paziente::PazienteService;
pub use prenotazione::PrenotazioneService;
pub use segretario::SegretarioService;

use thiserror::Error;
use validator::ValidationErrors;

use crate::db::DatabaseError;
use crate::messages::MessageKey;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// No ACTIVE record for the requested id or lookup key (no record at
    /// all, for delete/restore).
    #[error("Not found: {0}")]
    NotFound(MessageKey),

    /// Delete of a DELETED record, or restore of an ACTIVE one.
    #[error("Illegal status transition: {0}")]
    IllegalStatusTransition(MessageKey),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl From<rusqlite::Error> for ServiceError {
    fn from(err: rusqlite::Error) -> Self {
        ServiceError::Database(DatabaseError::Sqlite(err))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::dto::*;
    use crate::models::RecordStatus;
    use crate::db::{MedicoRepository, Repository};
    use chrono::{NaiveDate, NaiveTime};
    use rusqlite::Connection;

    fn medico_input(nome: &str, cognome: &str, email: &str) -> MedicoCreateDto {
        MedicoCreateDto {
            nome: nome.into(),
            cognome: cognome.into(),
            telefono: "+39 06 1234567".into(),
            email: email.into(),
        }
    }

    fn seed(conn: &Connection) -> (MedicoDto, SegretarioDto, PazienteDto, PrenotazioneDto) {
        let medico = MedicoService::new(conn)
            .create(medico_input("Mario", "Verdi", "mario.verdi@studio.it"))
            .unwrap();
        let segretario = SegretarioService::new(conn)
            .create(SegretarioCreateDto {
                nome: "Giulia".into(),
                cognome: "Bianchi".into(),
                telefono: "3331234567".into(),
                email: "giulia@studio.it".into(),
                medico_id: medico.id,
            })
            .unwrap();
        let paziente = PazienteService::new(conn)
            .create(PazienteCreateDto {
                nome: "Maria".into(),
                cognome: "Rossi".into(),
                telefono: "3479876543".into(),
                email: "maria.rossi@mail.it".into(),
                codice_fiscale: "rssmra80a41h501u".into(),
                medico_id: medico.id,
            })
            .unwrap();
        let prenotazione = PrenotazioneService::new(conn)
            .create(PrenotazioneCreateDto {
                data_prenotazione: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                ora_prenotazione: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                note: None,
                medico_id: medico.id,
                paziente_id: paziente.id,
            })
            .unwrap();
        (medico, segretario, paziente, prenotazione)
    }

    #[test]
    fn create_assigns_id_and_active_status() {
        let conn = open_memory_database().unwrap();
        let created = MedicoService::new(&conn)
            .create(medico_input("Mario", "Verdi", "a@studio.it"))
            .unwrap();
        assert!(created.id > 0);
        let stored = MedicoRepository::find_by_id(&conn, created.id).unwrap().unwrap();
        assert_eq!(stored.record_status, RecordStatus::Active);
    }

    #[test]
    fn get_after_soft_delete_is_not_found() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let created = service.create(medico_input("Mario", "Verdi", "a@studio.it")).unwrap();

        service.soft_delete(created.id).unwrap();
        let err = service.get_active(created.id).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("error.medico.notFound.exception")));
    }

    #[test]
    fn restore_after_soft_delete_makes_record_visible_again() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let created = service.create(medico_input("Mario", "Verdi", "a@studio.it")).unwrap();

        service.soft_delete(created.id).unwrap();
        service.restore(created.id).unwrap();
        assert_eq!(service.get_active(created.id).unwrap(), created);
    }

    #[test]
    fn double_soft_delete_is_illegal() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let created = service.create(medico_input("Mario", "Verdi", "a@studio.it")).unwrap();

        service.soft_delete(created.id).unwrap();
        let err = service.soft_delete(created.id).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::IllegalStatusTransition("error.medico.status.deleted.exception")
        ));
    }

    #[test]
    fn restore_of_active_record_is_illegal() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let created = service.create(medico_input("Mario", "Verdi", "a@studio.it")).unwrap();

        let err = service.restore(created.id).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::IllegalStatusTransition("error.medico.status.active.exception")
        ));
    }

    #[test]
    fn delete_and_restore_of_unknown_id_are_not_found() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        assert!(matches!(service.soft_delete(404), Err(ServiceError::NotFound(_))));
        assert!(matches!(service.restore(404), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn bulk_operations_skip_the_transition_guard() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let a = service.create(medico_input("Mario", "Verdi", "a@studio.it")).unwrap();
        service.create(medico_input("Luca", "Gialli", "b@studio.it")).unwrap();
        service.soft_delete(a.id).unwrap();

        // One record is already DELETED; the bulk flip still succeeds for both.
        assert_eq!(service.soft_delete_all().unwrap(), 2);
        assert!(service.list_active().unwrap().is_empty());
        assert_eq!(service.list_deleted().unwrap().len(), 2);

        assert_eq!(service.restore_all().unwrap(), 2);
        assert_eq!(service.restore_all().unwrap(), 2);
        assert_eq!(service.list_active().unwrap().len(), 2);
    }

    #[test]
    fn status_lists_stay_disjoint_across_transitions() {
        let conn = open_memory_database().unwrap();
        let service = PazienteService::new(&conn);
        let (medico, _, _, _) = seed(&conn);
        let mut ids = Vec::new();
        for (i, cf) in ["AAAAAA00A00A000A", "BBBBBB00B00B000B", "CCCCCC00C00C000C"]
            .iter()
            .enumerate()
        {
            let created = service
                .create(PazienteCreateDto {
                    nome: format!("Nome{i}"),
                    cognome: "Test".into(),
                    telefono: "3470000000".into(),
                    email: format!("p{i}@mail.it"),
                    codice_fiscale: (*cf).into(),
                    medico_id: medico.id,
                })
                .unwrap();
            ids.push(created.id);
        }
        service.soft_delete(ids[0]).unwrap();
        service.soft_delete(ids[1]).unwrap();
        service.restore(ids[0]).unwrap();

        let active: Vec<i64> = service.list_active().unwrap().iter().map(|p| p.id).collect();
        let deleted: Vec<i64> = service.list_deleted().unwrap().iter().map(|p| p.id).collect();
        assert!(active.iter().all(|id| !deleted.contains(id)));
        assert!(active.contains(&ids[0]) && active.contains(&ids[2]));
        assert_eq!(deleted, vec![ids[1]]);
    }

    #[test]
    fn update_with_one_field_leaves_the_rest_untouched() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let created = service.create(medico_input("Mario", "Verdi", "a@studio.it")).unwrap();

        let updated = service
            .update(
                created.id,
                MedicoUpdateDto {
                    telefono: Some("0698765432".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        let read_back = service.get_active(created.id).unwrap();
        assert_eq!(updated, read_back);
        assert_eq!(read_back.telefono, "0698765432");
        assert_eq!(read_back.nome, created.nome);
        assert_eq!(read_back.cognome, created.cognome);
        assert_eq!(read_back.email, created.email);
    }

    #[test]
    fn update_of_deleted_record_is_not_found() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let created = service.create(medico_input("Mario", "Verdi", "a@studio.it")).unwrap();
        service.soft_delete(created.id).unwrap();

        let err = service
            .update(
                created.id,
                MedicoUpdateDto {
                    nome: Some("Luigi".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn invalid_input_is_rejected_before_persistence() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let err = service
            .create(MedicoCreateDto {
                nome: String::new(),
                cognome: "Verdi".into(),
                telefono: "abc".into(),
                email: "not-an-email".into(),
            })
            .unwrap_err();
        let errors = match err {
            ServiceError::Validation(errors) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("nome"));
        assert!(fields.contains_key("telefono"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("cognome"));
        assert!(service.list_active().unwrap().is_empty());
    }

    #[test]
    fn duplicate_email_surfaces_as_integrity_violation() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        service.create(medico_input("Mario", "Verdi", "same@studio.it")).unwrap();
        let err = service
            .create(medico_input("Luca", "Gialli", "same@studio.it"))
            .unwrap_err();
        let db_err = match err {
            ServiceError::Database(db_err) => db_err,
            other => panic!("expected database error, got {other:?}"),
        };
        assert!(db_err.is_integrity_violation());
    }

    #[test]
    fn medico_by_paziente_requires_active_medico() {
        let conn = open_memory_database().unwrap();
        let (medico, _, paziente, _) = seed(&conn);
        let medici = MedicoService::new(&conn);

        assert_eq!(medici.get_by_paziente_id(paziente.id).unwrap().id, medico.id);

        medici.soft_delete(medico.id).unwrap();
        // The paziente is still ACTIVE, the resolved medico is not.
        assert!(PazienteService::new(&conn).get_active(paziente.id).is_ok());
        assert!(matches!(
            medici.get_by_paziente_id(paziente.id),
            Err(ServiceError::NotFound("error.medico.notFound.exception"))
        ));
    }

    #[test]
    fn derived_medico_lookups() {
        let conn = open_memory_database().unwrap();
        let (medico, segretario, _, prenotazione) = seed(&conn);
        let medici = MedicoService::new(&conn);

        assert_eq!(medici.get_by_segretario_id(segretario.id).unwrap(), medico);
        assert_eq!(medici.get_by_prenotazione_id(prenotazione.id).unwrap(), medico);
        assert_eq!(medici.get_by_email("mario.verdi@studio.it").unwrap(), medico);
        assert!(matches!(
            medici.get_by_email("nessuno@studio.it"),
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            medici.get_by_segretario_id(999),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn name_search_returns_only_active_matches() {
        let conn = open_memory_database().unwrap();
        let service = MedicoService::new(&conn);
        let hit = service.create(medico_input("Maria", "Rossi", "a@studio.it")).unwrap();
        let gone = service.create(medico_input("Maria Luisa", "Rossini", "b@studio.it")).unwrap();
        service.create(medico_input("maria", "Rossi", "c@studio.it")).unwrap();
        service.create(medico_input("Maria", "Russo", "d@studio.it")).unwrap();
        service.soft_delete(gone.id).unwrap();

        let found = service.search_by_nome_and_cognome("Maria", "Rossi").unwrap();
        assert_eq!(found, vec![hit]);
    }

    #[test]
    fn paziente_lookups_follow_relations() {
        let conn = open_memory_database().unwrap();
        let (medico, segretario, paziente, prenotazione) = seed(&conn);
        let pazienti = PazienteService::new(&conn);

        assert_eq!(pazienti.list_by_medico_id(medico.id).unwrap(), vec![paziente.clone()]);
        assert_eq!(
            pazienti.list_by_segretario_id(segretario.id).unwrap(),
            vec![paziente.clone()]
        );
        assert_eq!(pazienti.get_by_prenotazione_id(prenotazione.id).unwrap(), paziente);
        assert_eq!(pazienti.get_by_email("maria.rossi@mail.it").unwrap(), paziente);

        pazienti.soft_delete(paziente.id).unwrap();
        assert!(pazienti.list_by_medico_id(medico.id).unwrap().is_empty());
        assert!(matches!(
            pazienti.get_by_prenotazione_id(prenotazione.id),
            Err(ServiceError::NotFound("error.paziente.notFound.exception"))
        ));
    }

    #[test]
    fn codice_fiscale_is_stored_upper_case_and_looked_up_canonically() {
        let conn = open_memory_database().unwrap();
        let (_, _, paziente, _) = seed(&conn);
        assert_eq!(paziente.codice_fiscale, "RSSMRA80A41H501U");

        let pazienti = PazienteService::new(&conn);
        assert_eq!(pazienti.get_by_codice_fiscale("RSSMRA80A41H501U").unwrap(), paziente);
        assert_eq!(pazienti.get_by_codice_fiscale("rssmra80a41h501u").unwrap(), paziente);
    }

    #[test]
    fn paziente_search_scoped_by_medico_and_segretario() {
        let conn = open_memory_database().unwrap();
        let (medico, segretario, paziente, _) = seed(&conn);
        let other = MedicoService::new(&conn)
            .create(medico_input("Luca", "Gialli", "luca@studio.it"))
            .unwrap();
        let pazienti = PazienteService::new(&conn);
        pazienti
            .create(PazienteCreateDto {
                nome: "Maria".into(),
                cognome: "Rossini".into(),
                telefono: "3470000000".into(),
                email: "maria.rossini@mail.it".into(),
                codice_fiscale: "RSSMRA82A41H501Z".into(),
                medico_id: other.id,
            })
            .unwrap();

        assert_eq!(pazienti.search_by_nome_and_cognome("Maria", "Ross").unwrap().len(), 2);
        assert_eq!(
            pazienti
                .search_by_nome_and_cognome_and_medico_id("Maria", "Ross", medico.id)
                .unwrap(),
            vec![paziente.clone()]
        );
        assert_eq!(
            pazienti
                .search_by_nome_and_cognome_and_segretario_id("Maria", "Ross", segretario.id)
                .unwrap(),
            vec![paziente]
        );
    }

    #[test]
    fn write_referencing_deleted_medico_is_not_found() {
        let conn = open_memory_database().unwrap();
        let (medico, segretario, _, _) = seed(&conn);
        MedicoService::new(&conn).soft_delete(medico.id).unwrap();

        let err = SegretarioService::new(&conn)
            .create(SegretarioCreateDto {
                nome: "Paolo".into(),
                cognome: "Blu".into(),
                telefono: "3330000000".into(),
                email: "paolo@studio.it".into(),
                medico_id: medico.id,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("error.medico.notFound.exception")));

        let err = SegretarioService::new(&conn)
            .update(
                segretario.id,
                SegretarioUpdateDto {
                    medico_id: Some(medico.id),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("error.medico.notFound.exception")));
    }

    #[test]
    fn segretario_lookups() {
        let conn = open_memory_database().unwrap();
        let (medico, segretario, _, _) = seed(&conn);
        let segretari = SegretarioService::new(&conn);

        assert_eq!(segretari.list_by_medico_id(medico.id).unwrap(), vec![segretario.clone()]);
        assert_eq!(segretari.get_by_email("giulia@studio.it").unwrap(), segretario);
        assert_eq!(
            segretari.search_by_nome_and_cognome("Giu", "Bian").unwrap(),
            vec![segretario.clone()]
        );
        assert!(segretari
            .search_by_nome_and_cognome_and_medico_id("Giu", "Bian", medico.id + 1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn prenotazione_lifecycle_and_lookups() {
        let conn = open_memory_database().unwrap();
        let (medico, _, paziente, prenotazione) = seed(&conn);
        let prenotazioni = PrenotazioneService::new(&conn);

        assert_eq!(
            prenotazioni.list_by_medico_id(medico.id).unwrap(),
            vec![prenotazione.clone()]
        );
        assert_eq!(
            prenotazioni.list_by_paziente_id(paziente.id).unwrap(),
            vec![prenotazione.clone()]
        );

        let moved = prenotazioni
            .update(
                prenotazione.id,
                PrenotazioneUpdateDto {
                    ora_prenotazione: Some(NaiveTime::from_hms_opt(15, 30, 0).unwrap()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(moved.data_prenotazione, prenotazione.data_prenotazione);
        assert_eq!(moved.ora_prenotazione, NaiveTime::from_hms_opt(15, 30, 0).unwrap());

        prenotazioni.soft_delete(prenotazione.id).unwrap();
        assert!(prenotazioni.list_by_paziente_id(paziente.id).unwrap().is_empty());
        assert!(matches!(
            prenotazioni.soft_delete(prenotazione.id),
            Err(ServiceError::IllegalStatusTransition(
                "error.prenotazione.status.deleted.exception"
            ))
        ));
        assert!(matches!(
            MedicoService::new(&conn).get_by_prenotazione_id(prenotazione.id),
            Ok(_)
        ));
    }

    #[test]
    fn prenotazione_requires_active_paziente() {
        let conn = open_memory_database().unwrap();
        let (medico, _, paziente, _) = seed(&conn);
        PazienteService::new(&conn).soft_delete(paziente.id).unwrap();

        let err = PrenotazioneService::new(&conn)
            .create(PrenotazioneCreateDto {
                data_prenotazione: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                ora_prenotazione: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                note: Some("Controllo".into()),
                medico_id: medico.id,
                paziente_id: paziente.id,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound("error.paziente.notFound.exception")));
    }
}
