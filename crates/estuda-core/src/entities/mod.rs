pub mod disciplina;
pub mod prova;
pub mod response;
pub mod situacao;
pub mod usuario;

pub use disciplina::Entity as Disciplina;
pub use prova::Entity as Prova;
pub use situacao::Situacao;
pub use usuario::Entity as Usuario;
