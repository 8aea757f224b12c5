use rusqlite::Connection;
use validator::Validate;

use super::lifecycle::{self, EntityMessages};
use super::ServiceResult;
use crate::db::{MedicoRepository, PersonaRepository, Repository};
use crate::dto::{MedicoCreateDto, MedicoDto, MedicoUpdateDto};
use crate::models::{Medico, RecordStatus};

pub(crate) const MEDICO_MESSAGES: EntityMessages = EntityMessages {
    not_found: "error.medico.notFound.exception",
    already_deleted: "error.medico.status.deleted.exception",
    already_active: "error.medico.status.active.exception",
};

pub struct MedicoService<'c> {
    conn: &'c Connection,
}

impl<'c> MedicoService<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, dto: MedicoCreateDto) -> ServiceResult<MedicoDto> {
        dto.validate()?;
        let id = MedicoRepository::insert(self.conn, &Medico::from(dto))?;
        tracing::info!(medico_id = id, "Medico created");
        self.get_active(id)
    }

    pub fn get_active(&self, id: i64) -> ServiceResult<MedicoDto> {
        lifecycle::find_active::<MedicoRepository>(self.conn, id, &MEDICO_MESSAGES).map(Into::into)
    }

    pub fn list_active(&self) -> ServiceResult<Vec<MedicoDto>> {
        self.list_with_status(RecordStatus::Active)
    }

    pub fn list_deleted(&self) -> ServiceResult<Vec<MedicoDto>> {
        self.list_with_status(RecordStatus::Deleted)
    }

    fn list_with_status(&self, status: RecordStatus) -> ServiceResult<Vec<MedicoDto>> {
        let medici = lifecycle::list_with_status::<MedicoRepository>(self.conn, status)?;
        Ok(medici.into_iter().map(Into::into).collect())
    }

    /// Apply the fields present in `dto` to an ACTIVE medico.
    pub fn update(&self, id: i64, dto: MedicoUpdateDto) -> ServiceResult<MedicoDto> {
        dto.validate()?;
        let tx = self.conn.unchecked_transaction()?;
        let mut medico = lifecycle::find_active::<MedicoRepository>(&tx, id, &MEDICO_MESSAGES)?;

        if let Some(nome) = dto.nome {
            medico.nome = nome;
        }
        if let Some(cognome) = dto.cognome {
            medico.cognome = cognome;
        }
        if let Some(telefono) = dto.telefono {
            medico.telefono = telefono;
        }
        if let Some(email) = dto.email {
            medico.email = email;
        }

        MedicoRepository::update(&tx, &medico)?;
        tx.commit()?;
        tracing::info!(medico_id = id, "Medico updated");
        self.get_active(id)
    }

    pub fn soft_delete(&self, id: i64) -> ServiceResult<()> {
        lifecycle::soft_delete::<MedicoRepository>(self.conn, id, &MEDICO_MESSAGES)
    }

    pub fn restore(&self, id: i64) -> ServiceResult<()> {
        lifecycle::restore::<MedicoRepository>(self.conn, id, &MEDICO_MESSAGES)
    }

    pub fn soft_delete_all(&self) -> ServiceResult<usize> {
        lifecycle::soft_delete_all::<MedicoRepository>(self.conn)
    }

    pub fn restore_all(&self) -> ServiceResult<usize> {
        lifecycle::restore_all::<MedicoRepository>(self.conn)
    }

    /// Doctor of a secretary. Only the doctor's status is checked.
    pub fn get_by_segretario_id(&self, segretario_id: i64) -> ServiceResult<MedicoDto> {
        let medico = MedicoRepository::find_by_segretario_id(self.conn, segretario_id)?;
        lifecycle::require_active(medico, &MEDICO_MESSAGES).map(Into::into)
    }

    pub fn get_by_paziente_id(&self, paziente_id: i64) -> ServiceResult<MedicoDto> {
        let medico = MedicoRepository::find_by_paziente_id(self.conn, paziente_id)?;
        lifecycle::require_active(medico, &MEDICO_MESSAGES).map(Into::into)
    }

    pub fn get_by_prenotazione_id(&self, prenotazione_id: i64) -> ServiceResult<MedicoDto> {
        let medico = MedicoRepository::find_by_prenotazione_id(self.conn, prenotazione_id)?;
        lifecycle::require_active(medico, &MEDICO_MESSAGES).map(Into::into)
    }

    pub fn get_by_email(&self, email: &str) -> ServiceResult<MedicoDto> {
        let medico = MedicoRepository::find_by_email(self.conn, email)?;
        lifecycle::require_active(medico, &MEDICO_MESSAGES).map(Into::into)
    }

    pub fn search_by_nome_and_cognome(
        &self,
        nome: &str,
        cognome: &str,
    ) -> ServiceResult<Vec<MedicoDto>> {
        let medici = MedicoRepository::search_by_nome_and_cognome(self.conn, nome, cognome)?;
        Ok(lifecycle::retain_active(medici).into_iter().map(Into::into).collect())
    }
}
