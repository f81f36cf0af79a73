/// Default session length: 25 minutes.
pub const DURACAO_PADRAO: u64 = 25 * 60;

/// Countdown timer driven by the app's one-second tick.
#[derive(Debug, Clone)]
pub struct Pomodoro {
    pub restante: u64,
    pub rodando: bool,
    duracao: u64,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(DURACAO_PADRAO)
    }
}

impl Pomodoro {
    pub fn new(duracao: u64) -> Self {
        Self {
            restante: duracao,
            rodando: false,
            duracao,
        }
    }

    pub fn iniciar(&mut self) {
        if self.restante > 0 {
            self.rodando = true;
        }
    }

    pub fn pausar(&mut self) {
        self.rodando = false;
    }

    pub fn alternar(&mut self) {
        if self.rodando {
            self.pausar();
        } else {
            self.iniciar();
        }
    }

    pub fn reiniciar(&mut self) {
        self.restante = self.duracao;
        self.rodando = false;
    }

    /// Advances one second. Stops at zero instead of wrapping.
    pub fn tick(&mut self) {
        if !self.rodando {
            return;
        }
        self.restante = self.restante.saturating_sub(1);
        if self.restante == 0 {
            self.rodando = false;
        }
    }

    pub fn formatar_tempo(&self) -> String {
        format!("{:02}:{:02}", self.restante / 60, self.restante % 60)
    }
}
