use rusqlite::Connection;
use validator::Validate;

use super::lifecycle::{self, EntityMessages};
use super::medico::MEDICO_MESSAGES;
use super::ServiceResult;
use crate::db::{MedicoRepository, PersonaRepository, Repository, SegretarioRepository};
use crate::dto::{SegretarioCreateDto, SegretarioDto, SegretarioUpdateDto};
use crate::models::{RecordStatus, Segretario};

pub(crate) const SEGRETARIO_MESSAGES: EntityMessages = EntityMessages {
    not_found: "error.segretario.notFound.exception",
    already_deleted: "error.segretario.status.deleted.exception",
    already_active: "error.segretario.status.active.exception",
};

pub struct SegretarioService<'c> {
    conn: &'c Connection,
}

impl<'c> SegretarioService<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// The employing medico must be ACTIVE.
    pub fn create(&self, dto: SegretarioCreateDto) -> ServiceResult<SegretarioDto> {
        dto.validate()?;
        let tx = self.conn.unchecked_transaction()?;
        lifecycle::find_active::<MedicoRepository>(&tx, dto.medico_id, &MEDICO_MESSAGES)?;
        let id = SegretarioRepository::insert(&tx, &Segretario::from(dto))?;
        tx.commit()?;
        tracing::info!(segretario_id = id, "Segretario created");
        self.get_active(id)
    }

    pub fn get_active(&self, id: i64) -> ServiceResult<SegretarioDto> {
        lifecycle::find_active::<SegretarioRepository>(self.conn, id, &SEGRETARIO_MESSAGES)
            .map(Into::into)
    }

    pub fn list_active(&self) -> ServiceResult<Vec<SegretarioDto>> {
        self.list_with_status(RecordStatus::Active)
    }

    pub fn list_deleted(&self) -> ServiceResult<Vec<SegretarioDto>> {
        self.list_with_status(RecordStatus::Deleted)
    }

    fn list_with_status(&self, status: RecordStatus) -> ServiceResult<Vec<SegretarioDto>> {
        let segretari = lifecycle::list_with_status::<SegretarioRepository>(self.conn, status)?;
        Ok(segretari.into_iter().map(Into::into).collect())
    }

    pub fn update(&self, id: i64, dto: SegretarioUpdateDto) -> ServiceResult<SegretarioDto> {
        dto.validate()?;
        let tx = self.conn.unchecked_transaction()?;
        let mut segretario =
            lifecycle::find_active::<SegretarioRepository>(&tx, id, &SEGRETARIO_MESSAGES)?;

        if let Some(nome) = dto.nome {
            segretario.nome = nome;
        }
        if let Some(cognome) = dto.cognome {
            segretario.cognome = cognome;
        }
        if let Some(telefono) = dto.telefono {
            segretario.telefono = telefono;
        }
        if let Some(email) = dto.email {
            segretario.email = email;
        }
        if let Some(medico_id) = dto.medico_id {
            lifecycle::find_active::<MedicoRepository>(&tx, medico_id, &MEDICO_MESSAGES)?;
            segretario.medico_id = medico_id;
        }

        SegretarioRepository::update(&tx, &segretario)?;
        tx.commit()?;
        tracing::info!(segretario_id = id, "Segretario updated");
        self.get_active(id)
    }

    pub fn soft_delete(&self, id: i64) -> ServiceResult<()> {
        lifecycle::soft_delete::<SegretarioRepository>(self.conn, id, &SEGRETARIO_MESSAGES)
    }

    pub fn restore(&self, id: i64) -> ServiceResult<()> {
        lifecycle::restore::<SegretarioRepository>(self.conn, id, &SEGRETARIO_MESSAGES)
    }

    pub fn soft_delete_all(&self) -> ServiceResult<usize> {
        lifecycle::soft_delete_all::<SegretarioRepository>(self.conn)
    }

    pub fn restore_all(&self) -> ServiceResult<usize> {
        lifecycle::restore_all::<SegretarioRepository>(self.conn)
    }

    /// ACTIVE secretaries of a medico, possibly none.
    pub fn list_by_medico_id(&self, medico_id: i64) -> ServiceResult<Vec<SegretarioDto>> {
        let segretari = SegretarioRepository::find_by_medico_id(self.conn, medico_id)?;
        Ok(lifecycle::retain_active(segretari).into_iter().map(Into::into).collect())
    }

    pub fn get_by_email(&self, email: &str) -> ServiceResult<SegretarioDto> {
        let segretario = SegretarioRepository::find_by_email(self.conn, email)?;
        lifecycle::require_active(segretario, &SEGRETARIO_MESSAGES).map(Into::into)
    }

    pub fn search_by_nome_and_cognome(
        &self,
        nome: &str,
        cognome: &str,
    ) -> ServiceResult<Vec<SegretarioDto>> {
        let segretari = SegretarioRepository::search_by_nome_and_cognome(self.conn, nome, cognome)?;
        Ok(lifecycle::retain_active(segretari).into_iter().map(Into::into).collect())
    }

    pub fn search_by_nome_and_cognome_and_medico_id(
        &self,
        nome: &str,
        cognome: &str,
        medico_id: i64,
    ) -> ServiceResult<Vec<SegretarioDto>> {
        let segretari = SegretarioRepository::search_by_nome_and_cognome_and_medico_id(
            self.conn, nome, cognome, medico_id,
        )?;
        Ok(lifecycle::retain_active(segretari).into_iter().map(Into::into).collect())
    }
}
