/// Normalizes free-form status text: trims, lowercases and strips the
/// Portuguese diacritics, so "Concluído " and "concluido" compare equal.
pub fn normalizar(texto: &str) -> String {
    texto
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizar_remove_acentos() {
        assert_eq!(normalizar("Concluído"), "concluido");
        assert_eq!(normalizar("Não Iniciado"), "nao iniciado");
        assert_eq!(normalizar("Física"), "fisica");
    }

    #[test]
    fn test_normalizar_apara_e_minusculas() {
        assert_eq!(normalizar("  Em Andamento  "), "em andamento");
        assert_eq!(normalizar("CÁLCULO"), "calculo");
    }

    #[test]
    fn test_normalizar_vazio() {
        assert_eq!(normalizar(""), "");
        assert_eq!(normalizar("   "), "");
    }
}
