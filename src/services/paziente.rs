use rusqlite::Connection;
use validator::Validate;

use super::lifecycle::{self, EntityMessages};
use super::medico::MEDICO_MESSAGES;
use super::ServiceResult;
use crate::db::{MedicoRepository, PazienteRepository, PersonaRepository, Repository};
use crate::dto::{PazienteCreateDto, PazienteDto, PazienteUpdateDto};
use crate::models::{Paziente, RecordStatus};

pub(crate) const PAZIENTE_MESSAGES: EntityMessages = EntityMessages {
    not_found: "error.paziente.notFound.exception",
    already_deleted: "error.paziente.status.deleted.exception",
    already_active: "error.paziente.status.active.exception",
};

/// Codici fiscali are stored and compared upper-case.
fn canonical_codice_fiscale(codice_fiscale: &str) -> String {
    codice_fiscale.trim().to_ascii_uppercase()
}

pub struct PazienteService<'c> {
    conn: &'c Connection,
}

impl<'c> PazienteService<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, dto: PazienteCreateDto) -> ServiceResult<PazienteDto> {
        dto.validate()?;
        let tx = self.conn.unchecked_transaction()?;
        lifecycle::find_active::<MedicoRepository>(&tx, dto.medico_id, &MEDICO_MESSAGES)?;

        let mut paziente = Paziente::from(dto);
        paziente.codice_fiscale = canonical_codice_fiscale(&paziente.codice_fiscale);
        let id = PazienteRepository::insert(&tx, &paziente)?;
        tx.commit()?;

        tracing::info!(paziente_id = id, "Paziente created");
        self.get_active(id)
    }

    pub fn get_active(&self, id: i64) -> ServiceResult<PazienteDto> {
        lifecycle::find_active::<PazienteRepository>(self.conn, id, &PAZIENTE_MESSAGES)
            .map(Into::into)
    }

    pub fn list_active(&self) -> ServiceResult<Vec<PazienteDto>> {
        self.list_with_status(RecordStatus::Active)
    }

    pub fn list_deleted(&self) -> ServiceResult<Vec<PazienteDto>> {
        self.list_with_status(RecordStatus::Deleted)
    }

    fn list_with_status(&self, status: RecordStatus) -> ServiceResult<Vec<PazienteDto>> {
        let pazienti = lifecycle::list_with_status::<PazienteRepository>(self.conn, status)?;
        Ok(pazienti.into_iter().map(Into::into).collect())
    }

    pub fn update(&self, id: i64, dto: PazienteUpdateDto) -> ServiceResult<PazienteDto> {
        dto.validate()?;
        let tx = self.conn.unchecked_transaction()?;
        let mut paziente =
            lifecycle::find_active::<PazienteRepository>(&tx, id, &PAZIENTE_MESSAGES)?;

        if let Some(nome) = dto.nome {
            paziente.nome = nome;
        }
        if let Some(cognome) = dto.cognome {
            paziente.cognome = cognome;
        }
        if let Some(telefono) = dto.telefono {
            paziente.telefono = telefono;
        }
        if let Some(email) = dto.email {
            paziente.email = email;
        }
        if let Some(codice_fiscale) = dto.codice_fiscale {
            paziente.codice_fiscale = canonical_codice_fiscale(&codice_fiscale);
        }
        if let Some(medico_id) = dto.medico_id {
            lifecycle::find_active::<MedicoRepository>(&tx, medico_id, &MEDICO_MESSAGES)?;
            paziente.medico_id = medico_id;
        }

        PazienteRepository::update(&tx, &paziente)?;
        tx.commit()?;
        tracing::info!(paziente_id = id, "Paziente updated");
        self.get_active(id)
    }

    pub fn soft_delete(&self, id: i64) -> ServiceResult<()> {
        lifecycle::soft_delete::<PazienteRepository>(self.conn, id, &PAZIENTE_MESSAGES)
    }

    pub fn restore(&self, id: i64) -> ServiceResult<()> {
        lifecycle::restore::<PazienteRepository>(self.conn, id, &PAZIENTE_MESSAGES)
    }

    pub fn soft_delete_all(&self) -> ServiceResult<usize> {
        lifecycle::soft_delete_all::<PazienteRepository>(self.conn)
    }

    pub fn restore_all(&self) -> ServiceResult<usize> {
        lifecycle::restore_all::<PazienteRepository>(self.conn)
    }

    pub fn list_by_medico_id(&self, medico_id: i64) -> ServiceResult<Vec<PazienteDto>> {
        let pazienti = PazienteRepository::find_by_medico_id(self.conn, medico_id)?;
        Ok(lifecycle::retain_active(pazienti).into_iter().map(Into::into).collect())
    }

    /// Patients of the medico the secretary works for.
    pub fn list_by_segretario_id(&self, segretario_id: i64) -> ServiceResult<Vec<PazienteDto>> {
        let pazienti = PazienteRepository::find_by_segretario_id(self.conn, segretario_id)?;
        Ok(lifecycle::retain_active(pazienti).into_iter().map(Into::into).collect())
    }

    pub fn get_by_prenotazione_id(&self, prenotazione_id: i64) -> ServiceResult<PazienteDto> {
        let paziente = PazienteRepository::find_by_prenotazione_id(self.conn, prenotazione_id)?;
        lifecycle::require_active(paziente, &PAZIENTE_MESSAGES).map(Into::into)
    }

    pub fn get_by_email(&self, email: &str) -> ServiceResult<PazienteDto> {
        let paziente = PazienteRepository::find_by_email(self.conn, email)?;
        lifecycle::require_active(paziente, &PAZIENTE_MESSAGES).map(Into::into)
    }

    pub fn get_by_codice_fiscale(&self, codice_fiscale: &str) -> ServiceResult<PazienteDto> {
        let paziente = PazienteRepository::find_by_codice_fiscale(
            self.conn,
            &canonical_codice_fiscale(codice_fiscale),
        )?;
        lifecycle::require_active(paziente, &PAZIENTE_MESSAGES).map(Into::into)
    }

    pub fn search_by_nome_and_cognome(
        &self,
        nome: &str,
        cognome: &str,
    ) -> ServiceResult<Vec<PazienteDto>> {
        let pazienti = PazienteRepository::search_by_nome_and_cognome(self.conn, nome, cognome)?;
        Ok(lifecycle::retain_active(pazienti).into_iter().map(Into::into).collect())
    }

    pub fn search_by_nome_and_cognome_and_medico_id(
        &self,
        nome: &str,
        cognome: &str,
        medico_id: i64,
    ) -> ServiceResult<Vec<PazienteDto>> {
        let pazienti = PazienteRepository::search_by_nome_and_cognome_and_medico_id(
            self.conn, nome, cognome, medico_id,
        )?;
        Ok(lifecycle::retain_active(pazienti).into_iter().map(Into::into).collect())
    }

    pub fn search_by_nome_and_cognome_and_segretario_id(
        &self,
        nome: &str,
        cognome: &str,
        segretario_id: i64,
    ) -> ServiceResult<Vec<PazienteDto>> {
        let pazienti = PazienteRepository::search_by_nome_and_cognome_and_segretario_id(
            self.conn,
            nome,
            cognome,
            segretario_id,
        )?;
        Ok(lifecycle::retain_active(pazienti).into_iter().map(Into::into).collect())
    }
}
