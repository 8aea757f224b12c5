use rusqlite::Connection;
use validator::Validate;

use super::lifecycle::{self, EntityMessages};
use super::medico::MEDICO_MESSAGES;
use super::paziente::PAZIENTE_MESSAGES;
use super::ServiceResult;
use crate::db::{MedicoRepository, PazienteRepository, PrenotazioneRepository, Repository};
use crate::dto::{PrenotazioneCreateDto, PrenotazioneDto, PrenotazioneUpdateDto};
use crate::models::{Prenotazione, RecordStatus};

pub(crate) const PRENOTAZIONE_MESSAGES: EntityMessages = EntityMessages {
    not_found: "error.prenotazione.notFound.exception",
    already_deleted: "error.prenotazione.status.deleted.exception",
    already_active: "error.prenotazione.status.active.exception",
};

pub struct PrenotazioneService<'c> {
    conn: &'c Connection,
}

impl<'c> PrenotazioneService<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Both the medico and the paziente must be ACTIVE.
    pub fn create(&self, dto: PrenotazioneCreateDto) -> ServiceResult<PrenotazioneDto> {
        dto.validate()?;
        let tx = self.conn.unchecked_transaction()?;
        lifecycle::find_active::<MedicoRepository>(&tx, dto.medico_id, &MEDICO_MESSAGES)?;
        lifecycle::find_active::<PazienteRepository>(&tx, dto.paziente_id, &PAZIENTE_MESSAGES)?;
        let id = PrenotazioneRepository::insert(&tx, &Prenotazione::from(dto))?;
        tx.commit()?;

        tracing::info!(prenotazione_id = id, "Prenotazione created");
        self.get_active(id)
    }

    pub fn get_active(&self, id: i64) -> ServiceResult<PrenotazioneDto> {
        lifecycle::find_active::<PrenotazioneRepository>(self.conn, id, &PRENOTAZIONE_MESSAGES)
            .map(Into::into)
    }

    pub fn list_active(&self) -> ServiceResult<Vec<PrenotazioneDto>> {
        self.list_with_status(RecordStatus::Active)
    }

    pub fn list_deleted(&self) -> ServiceResult<Vec<PrenotazioneDto>> {
        self.list_with_status(RecordStatus::Deleted)
    }

    fn list_with_status(&self, status: RecordStatus) -> ServiceResult<Vec<PrenotazioneDto>> {
        let prenotazioni = lifecycle::list_with_status::<PrenotazioneRepository>(self.conn, status)?;
        Ok(prenotazioni.into_iter().map(Into::into).collect())
    }

    pub fn update(&self, id: i64, dto: PrenotazioneUpdateDto) -> ServiceResult<PrenotazioneDto> {
        dto.validate()?;
        let tx = self.conn.unchecked_transaction()?;
        let mut prenotazione =
            lifecycle::find_active::<PrenotazioneRepository>(&tx, id, &PRENOTAZIONE_MESSAGES)?;

        if let Some(data) = dto.data_prenotazione {
            prenotazione.data_prenotazione = data;
        }
        if let Some(ora) = dto.ora_prenotazione {
            prenotazione.ora_prenotazione = ora;
        }
        if let Some(note) = dto.note {
            prenotazione.note = Some(note);
        }
        if let Some(medico_id) = dto.medico_id {
            lifecycle::find_active::<MedicoRepository>(&tx, medico_id, &MEDICO_MESSAGES)?;
            prenotazione.medico_id = medico_id;
        }
        if let Some(paziente_id) = dto.paziente_id {
            lifecycle::find_active::<PazienteRepository>(&tx, paziente_id, &PAZIENTE_MESSAGES)?;
            prenotazione.paziente_id = paziente_id;
        }

        PrenotazioneRepository::update(&tx, &prenotazione)?;
        tx.commit()?;
        tracing::info!(prenotazione_id = id, "Prenotazione updated");
        self.get_active(id)
    }

    pub fn soft_delete(&self, id: i64) -> ServiceResult<()> {
        lifecycle::soft_delete::<PrenotazioneRepository>(self.conn, id, &PRENOTAZIONE_MESSAGES)
    }

    pub fn restore(&self, id: i64) -> ServiceResult<()> {
        lifecycle::restore::<PrenotazioneRepository>(self.conn, id, &PRENOTAZIONE_MESSAGES)
    }

    pub fn soft_delete_all(&self) -> ServiceResult<usize> {
        lifecycle::soft_delete_all::<PrenotazioneRepository>(self.conn)
    }

    pub fn restore_all(&self) -> ServiceResult<usize> {
        lifecycle::restore_all::<PrenotazioneRepository>(self.conn)
    }

    pub fn list_by_medico_id(&self, medico_id: i64) -> ServiceResult<Vec<PrenotazioneDto>> {
        let prenotazioni = PrenotazioneRepository::find_by_medico_id(self.conn, medico_id)?;
        Ok(lifecycle::retain_active(prenotazioni).into_iter().map(Into::into).collect())
    }

    pub fn list_by_paziente_id(&self, paziente_id: i64) -> ServiceResult<Vec<PrenotazioneDto>> {
        let prenotazioni = PrenotazioneRepository::find_by_paziente_id(self.conn, paziente_id)?;
        Ok(lifecycle::retain_active(prenotazioni).into_iter().map(Into::into).collect())
    }
}
