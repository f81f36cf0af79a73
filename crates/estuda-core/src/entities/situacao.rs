use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::texto::normalizar;

/// The three fixed study states, used both as kanban column key and as a
/// record field. Stored and serialized with the canonical accented labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Situacao {
    #[sea_orm(string_value = "Não Iniciado")]
    NaoIniciado,
    #[sea_orm(string_value = "Em Andamento")]
    EmAndamento,
    #[sea_orm(string_value = "Concluído")]
    Concluido,
}

impl Situacao {
    pub const TODAS: [Situacao; 3] = [
        Situacao::NaoIniciado,
        Situacao::EmAndamento,
        Situacao::Concluido,
    ];

    pub fn rotulo(&self) -> &'static str {
        match self {
            Situacao::NaoIniciado => "Não Iniciado",
            Situacao::EmAndamento => "Em Andamento",
            Situacao::Concluido => "Concluído",
        }
    }
}

impl Default for Situacao {
    fn default() -> Self {
        Self::NaoIniciado
    }
}

impl fmt::Display for Situacao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rotulo())
    }
}

impl FromStr for Situacao {
    type Err = String;

    /// Loose parsing: accents, case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalizar(s).as_str() {
            "nao iniciado" => Ok(Situacao::NaoIniciado),
            "em andamento" => Ok(Situacao::EmAndamento),
            "concluido" => Ok(Situacao::Concluido),
            _ => Err(format!("Situação desconhecida: {s:?}")),
        }
    }
}

impl Serialize for Situacao {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.rotulo())
    }
}

impl<'de> Deserialize<'de> for Situacao {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let texto = String::deserialize(deserializer)?;
        texto.parse().map_err(de::Error::custom)
    }
}
