pub mod enums;
pub mod medico;
pub mod paziente;
pub mod prenotazione;
pub mod segretario;

pub use enums::RecordStatus;
pub use medico::*;
pub use paziente::*;
pub use prenotazione::*;
pub use segretario::*;

/// Entities carrying a `record_status` lifecycle flag.
pub trait StatusTracked {
    fn record_status(&self) -> RecordStatus;

    fn is_active(&self) -> bool {
        self.record_status() == RecordStatus::Active
    }
}

macro_rules! status_tracked {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl StatusTracked for $entity {
                fn record_status(&self) -> RecordStatus {
                    self.record_status
                }
            }
        )+
    };
}

status_tracked!(Medico, Segretario, Paziente, Prenotazione);
