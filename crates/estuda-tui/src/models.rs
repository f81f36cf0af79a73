use chrono::NaiveDate;

pub use estuda_core::entities::disciplina::{
    AtualizarDisciplina, CriarDisciplina, MetricasPainel, Model as Disciplina,
};
pub use estuda_core::entities::prova::{AtualizarProva, CriarProva, Model as Prova};
pub use estuda_core::entities::response::{ApiResponse, WsEvent};
pub use estuda_core::entities::situacao::Situacao;
pub use estuda_core::entities::usuario::{Credenciais, Perfil, RespostaLogin};

/// Column-stepping used when a card is moved across the kanban board.
pub trait SituacaoExt {
    fn proxima(&self) -> Option<Situacao>;
    fn anterior(&self) -> Option<Situacao>;
}

impl SituacaoExt for Situacao {
    fn proxima(&self) -> Option<Situacao> {
        match self {
            Situacao::NaoIniciado => Some(Situacao::EmAndamento),
            Situacao::EmAndamento => Some(Situacao::Concluido),
            Situacao::Concluido => None,
        }
    }

    fn anterior(&self) -> Option<Situacao> {
        match self {
            Situacao::NaoIniciado => None,
            Situacao::EmAndamento => Some(Situacao::NaoIniciado),
            Situacao::Concluido => Some(Situacao::EmAndamento),
        }
    }
}

/// Renders a date the way the app displays it everywhere: dd/mm/yyyy.
pub fn formatar_data(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

/// Accepts dates typed as dd/mm/yyyy or yyyy-mm-dd.
pub fn parsear_data(texto: &str) -> Option<NaiveDate> {
    let texto = texto.trim();
    NaiveDate::parse_from_str(texto, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(texto, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_passos_do_kanban() {
        assert_eq!(Situacao::NaoIniciado.proxima(), Some(Situacao::EmAndamento));
        assert_eq!(Situacao::EmAndamento.proxima(), Some(Situacao::Concluido));
        assert_eq!(Situacao::Concluido.proxima(), None);

        assert_eq!(Situacao::Concluido.anterior(), Some(Situacao::EmAndamento));
        assert_eq!(Situacao::EmAndamento.anterior(), Some(Situacao::NaoIniciado));
        assert_eq!(Situacao::NaoIniciado.anterior(), None);
    }

    #[test]
    fn test_formatar_data() {
        let data = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(formatar_data(data), "09/03/2025");
    }

    #[test]
    fn test_parsear_data_ambos_formatos() {
        let esperado = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(parsear_data("01/12/2025"), Some(esperado));
        assert_eq!(parsear_data("2025-12-01"), Some(esperado));
        assert_eq!(parsear_data(" 01/12/2025 "), Some(esperado));
        assert_eq!(parsear_data("12-01-2025"), None);
        assert_eq!(parsear_data(""), None);
    }
}
