use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use uuid::Uuid;

use estuda_core::texto::normalizar;

use crate::api::ApiClient;
use crate::models::{
    formatar_data, parsear_data, AtualizarDisciplina, AtualizarProva, CriarDisciplina, CriarProva,
    Disciplina, MetricasPainel, Prova, Situacao, SituacaoExt, WsEvent,
};
use crate::pomodoro::Pomodoro;
use crate::tui;
use crate::ui;
use crate::ws::StreamClient;

/// Current view/screen in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Painel,
    Disciplinas,
    Provas,
}

/// Input mode for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Multi-step text forms. Fields are filled one at a time in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formulario {
    Nenhum,
    Login,
    Registro,
    NovaDisciplina,
    NovaProva,
}

impl Formulario {
    pub fn rotulos(&self) -> &'static [&'static str] {
        match self {
            Formulario::Login | Formulario::Registro => &["Email", "Senha"],
            Formulario::NovaDisciplina => &[
                "Nome",
                "Semestre",
                "Início (dd/mm/aaaa)",
                "Fim (dd/mm/aaaa)",
                "Dia 1 (opcional)",
                "Horário 1 início (opcional)",
                "Horário 1 final (opcional)",
                "Dia 2 (opcional)",
                "Horário 2 início (opcional)",
                "Horário 2 final (opcional)",
            ],
            Formulario::NovaProva => &["Disciplina", "Título", "Data (dd/mm/aaaa)"],
            Formulario::Nenhum => &[],
        }
    }

    pub fn titulo(&self) -> &'static str {
        match self {
            Formulario::Login => "Entrar",
            Formulario::Registro => "Criar conta",
            Formulario::NovaDisciplina => "Nova disciplina",
            Formulario::NovaProva => "Nova prova",
            Formulario::Nenhum => "",
        }
    }

    fn campo_obrigatorio(&self, passo: usize) -> bool {
        match self {
            Formulario::NovaDisciplina => passo < 4,
            Formulario::Nenhum => false,
            _ => true,
        }
    }

    fn campo_de_data(&self, passo: usize) -> bool {
        match self {
            Formulario::NovaDisciplina => passo == 2 || passo == 3,
            Formulario::NovaProva => passo == 2,
            _ => false,
        }
    }

    fn campo_de_senha(&self, passo: usize) -> bool {
        matches!(self, Formulario::Login | Formulario::Registro) && passo == 1
    }
}

/// Pending delete, waiting for the user to confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusao {
    Disciplina(Uuid),
    Prova(Uuid),
}

/// One meeting slot of the weekly schedule grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinhaGrade {
    pub disciplina: String,
    pub dia: String,
    pub inicio: String,
    pub fim: String,
    pub periodo: String,
    pub situacao: Situacao,
}

/// Application state
pub struct App {
    pub api: ApiClient,
    pub view: View,
    pub input_mode: InputMode,
    pub input: String,
    pub formulario: Formulario,
    pub passo: usize,
    valores: Vec<String>,

    // Disciplinas (kanban)
    pub disciplinas: Vec<Disciplina>,
    pub coluna: Situacao,
    pub indice_cartao: usize,
    /// Display order of the cards. Reordering inside a column only touches
    /// this list, it is never sent to the server.
    ordem: Vec<Uuid>,
    pub filtro_semestre: Option<String>,

    // Provas
    pub provas: Vec<Prova>,
    pub indice_prova: usize,

    // Painel
    pub metricas: MetricasPainel,
    pub pomodoro: Pomodoro,

    pub confirmacao: Option<Exclusao>,
    pub status_message: Option<String>,
    pub running: bool,

    tick_rate: f64,
    ws_rx: Option<mpsc::UnboundedReceiver<WsEvent>>,
    _stream: Option<StreamClient>,
}

impl App {
    pub fn new(tick_rate: f64, server_url: &str) -> Self {
        Self {
            api: ApiClient::new(server_url),
            view: View::Login,
            input_mode: InputMode::Normal,
            input: String::new(),
            formulario: Formulario::Nenhum,
            passo: 0,
            valores: Vec::new(),
            disciplinas: Vec::new(),
            coluna: Situacao::NaoIniciado,
            indice_cartao: 0,
            ordem: Vec::new(),
            filtro_semestre: None,
            provas: Vec::new(),
            indice_prova: 0,
            metricas: MetricasPainel::default(),
            pomodoro: Pomodoro::default(),
            confirmacao: None,
            status_message: None,
            running: true,
            tick_rate,
            ws_rx: None,
            _stream: None,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut terminal = tui::init()?;
        let resultado = self.event_loop(&mut terminal).await;
        tui::restore()?;
        resultado
    }

    async fn event_loop(&mut self, terminal: &mut tui::Tui) -> color_eyre::Result<()> {
        let mut events = EventStream::new();
        let mut tick =
            tokio::time::interval(Duration::from_secs_f64(1.0 / self.tick_rate.max(1.0)));
        let mut segundo = tokio::time::interval(Duration::from_secs(1));

        while self.running {
            terminal.draw(|frame| ui::draw(frame, self))?;

            tokio::select! {
                _ = tick.tick() => {
                    self.drenar_eventos().await;
                }
                _ = segundo.tick() => {
                    self.pomodoro.tick();
                }
                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key) = event {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key(key).await;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    // --- Kanban helpers ---

    pub fn semestres(&self) -> Vec<String> {
        let mut lista: Vec<String> = self
            .disciplinas
            .iter()
            .map(|d| d.semestre.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        lista.sort();
        lista.dedup();
        lista
    }

    pub fn ciclar_semestre(&mut self) {
        let semestres = self.semestres();
        self.filtro_semestre = match &self.filtro_semestre {
            None => semestres.first().cloned(),
            Some(atual) => {
                let pos = semestres.iter().position(|s| s == atual);
                match pos {
                    Some(i) if i + 1 < semestres.len() => Some(semestres[i + 1].clone()),
                    _ => None,
                }
            }
        };
        self.indice_cartao = 0;
    }

    pub fn disciplinas_filtradas(&self) -> Vec<&Disciplina> {
        self.disciplinas
            .iter()
            .filter(|d| match &self.filtro_semestre {
                Some(semestre) => d.semestre.trim() == semestre,
                None => true,
            })
            .collect()
    }

    pub fn cartoes_na_coluna(&self, situacao: Situacao) -> Vec<&Disciplina> {
        let mut cartoes: Vec<&Disciplina> = self
            .disciplinas_filtradas()
            .into_iter()
            .filter(|d| d.situacao == situacao)
            .collect();
        cartoes.sort_by_key(|d| self.ordem.iter().position(|id| *id == d.id));
        cartoes
    }

    pub fn cartao_selecionado(&self) -> Option<&Disciplina> {
        self.cartoes_na_coluna(self.coluna)
            .get(self.indice_cartao)
            .copied()
    }

    pub fn prova_selecionada(&self) -> Option<&Prova> {
        self.provas.get(self.indice_prova)
    }

    pub fn nome_da_disciplina(&self, id: Uuid) -> String {
        self.disciplinas
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.nome.clone())
            .unwrap_or_else(|| "?".to_string())
    }

    fn proximo_cartao(&mut self) {
        let total = self.cartoes_na_coluna(self.coluna).len();
        if total > 0 {
            self.indice_cartao = (self.indice_cartao + 1) % total;
        }
    }

    fn cartao_anterior(&mut self) {
        let total = self.cartoes_na_coluna(self.coluna).len();
        if total > 0 {
            self.indice_cartao = if self.indice_cartao == 0 {
                total - 1
            } else {
                self.indice_cartao - 1
            };
        }
    }

    fn proxima_coluna(&mut self) {
        self.coluna = self.coluna.proxima().unwrap_or(Situacao::NaoIniciado);
        self.indice_cartao = 0;
    }

    fn coluna_anterior(&mut self) {
        self.coluna = self.coluna.anterior().unwrap_or(Situacao::Concluido);
        self.indice_cartao = 0;
    }

    /// Swaps the selected card with its neighbor inside the current column.
    /// Purely cosmetic: only the local display order changes.
    pub fn reordenar(&mut self, para_baixo: bool) {
        let cartoes = self.cartoes_na_coluna(self.coluna);
        let total = cartoes.len();
        if total < 2 {
            return;
        }
        let vizinho = if para_baixo {
            if self.indice_cartao + 1 >= total {
                return;
            }
            self.indice_cartao + 1
        } else {
            if self.indice_cartao == 0 {
                return;
            }
            self.indice_cartao - 1
        };

        let id_atual = cartoes[self.indice_cartao].id;
        let id_vizinho = cartoes[vizinho].id;
        let pos_atual = self.ordem.iter().position(|id| *id == id_atual);
        let pos_vizinho = self.ordem.iter().position(|id| *id == id_vizinho);
        if let (Some(a), Some(b)) = (pos_atual, pos_vizinho) {
            self.ordem.swap(a, b);
            self.indice_cartao = vizinho;
        }
    }

    /// Drops known ids that disappeared and appends newly seen ones.
    fn sincronizar_ordem(&mut self) {
        self.ordem
            .retain(|id| self.disciplinas.iter().any(|d| d.id == *id));
        for disciplina in &self.disciplinas {
            if !self.ordem.contains(&disciplina.id) {
                self.ordem.push(disciplina.id);
            }
        }
    }

    /// One row per weekly meeting slot, over the filtered disciplinas.
    pub fn linhas_grade(&self) -> Vec<LinhaGrade> {
        let mut linhas = Vec::new();
        for disciplina in self.disciplinas_filtradas() {
            let periodo = format!(
                "{} → {}",
                formatar_data(disciplina.data_inicio),
                formatar_data(disciplina.data_fim)
            );
            let slots = [
                (
                    &disciplina.dia_1,
                    &disciplina.horario_1_inicio,
                    &disciplina.horario_1_final,
                ),
                (
                    &disciplina.dia_2,
                    &disciplina.horario_2_inicio,
                    &disciplina.horario_2_final,
                ),
            ];
            for (dia, inicio, fim) in slots {
                if let Some(dia) = dia.as_deref().filter(|d| !d.trim().is_empty()) {
                    linhas.push(LinhaGrade {
                        disciplina: disciplina.nome.clone(),
                        dia: dia.trim().to_string(),
                        inicio: inicio.clone().unwrap_or_default(),
                        fim: fim.clone().unwrap_or_default(),
                        periodo: periodo.clone(),
                        situacao: disciplina.situacao,
                    });
                }
            }
        }
        linhas
    }

    /// Full field listing for the selected card, shown in the details pane
    /// under the board. Every stored column is visible here, including the
    /// date range and both meeting slots.
    pub fn detalhes_do_cartao(&self) -> Vec<(String, String)> {
        let Some(d) = self.cartao_selecionado() else {
            return Vec::new();
        };
        let slot = |dia: &Option<String>, inicio: &Option<String>, fim: &Option<String>| {
            match dia.as_deref().filter(|dia| !dia.trim().is_empty()) {
                Some(dia) => format!(
                    "{} {} - {}",
                    dia.trim(),
                    inicio.clone().unwrap_or_default(),
                    fim.clone().unwrap_or_default()
                ),
                None => "-".to_string(),
            }
        };
        vec![
            ("Nome".to_string(), d.nome.clone()),
            ("Semestre".to_string(), d.semestre.trim().to_string()),
            ("Situação".to_string(), d.situacao.rotulo().to_string()),
            (
                "Período".to_string(),
                format!(
                    "{} → {}",
                    formatar_data(d.data_inicio),
                    formatar_data(d.data_fim)
                ),
            ),
            (
                "Horário 1".to_string(),
                slot(&d.dia_1, &d.horario_1_inicio, &d.horario_1_final),
            ),
            (
                "Horário 2".to_string(),
                slot(&d.dia_2, &d.horario_2_inicio, &d.horario_2_final),
            ),
        ]
    }

    // --- API operations ---

    async fn recarregar(&mut self) {
        match self.api.list_disciplinas().await {
            Ok(disciplinas) => {
                self.disciplinas = disciplinas;
                self.sincronizar_ordem();
                let total = self.cartoes_na_coluna(self.coluna).len();
                if self.indice_cartao >= total {
                    self.indice_cartao = total.saturating_sub(1);
                }
            }
            Err(e) => self.set_status(&format!("Erro ao carregar disciplinas: {e}")),
        }
        match self.api.list_provas().await {
            Ok(provas) => {
                self.provas = provas;
                if self.indice_prova >= self.provas.len() {
                    self.indice_prova = self.provas.len().saturating_sub(1);
                }
            }
            Err(e) => self.set_status(&format!("Erro ao carregar provas: {e}")),
        }
        match self.api.metricas().await {
            Ok(metricas) => self.metricas = metricas,
            Err(e) => self.set_status(&format!("Erro ao carregar métricas: {e}")),
        }
    }

    /// Moves the selected card to the next/previous column. Unlike local
    /// reordering this persists the new situacao on the server.
    async fn mover_cartao(&mut self, avancar: bool) {
        let Some(cartao) = self.cartao_selecionado() else {
            return;
        };
        let nova = if avancar {
            cartao.situacao.proxima()
        } else {
            cartao.situacao.anterior()
        };
        let Some(nova) = nova else {
            return;
        };
        let id = cartao.id;
        let payload = AtualizarDisciplina {
            situacao: Some(nova),
            ..Default::default()
        };
        match self.api.update_disciplina(id, &payload).await {
            Ok(_) => {
                self.recarregar().await;
                self.coluna = nova;
                let pos = self
                    .cartoes_na_coluna(nova)
                    .iter()
                    .position(|d| d.id == id)
                    .unwrap_or(0);
                self.indice_cartao = pos;
            }
            Err(e) => self.set_status(&format!("Erro ao mover: {e}")),
        }
    }

    async fn avancar_situacao_da_prova(&mut self) {
        let Some(prova) = self.prova_selecionada() else {
            return;
        };
        let Some(nova) = prova.situacao.proxima() else {
            return;
        };
        let id = prova.id;
        let payload = AtualizarProva {
            situacao: Some(nova),
            ..Default::default()
        };
        match self.api.update_prova(id, &payload).await {
            Ok(_) => self.recarregar().await,
            Err(e) => self.set_status(&format!("Erro ao atualizar prova: {e}")),
        }
    }

    async fn confirmar_exclusao(&mut self) {
        let Some(exclusao) = self.confirmacao.take() else {
            return;
        };
        let resultado = match exclusao {
            Exclusao::Disciplina(id) => self.api.delete_disciplina(id).await,
            Exclusao::Prova(id) => self.api.delete_prova(id).await,
        };
        match resultado {
            Ok(()) => {
                self.set_status("Excluído");
                self.recarregar().await;
            }
            Err(e) => self.set_status(&format!("Erro ao excluir: {e}")),
        }
    }

    fn conectar_stream(&mut self) {
        match self.api.stream_ws_url() {
            Ok(url) => {
                let (tx, rx) = mpsc::unbounded_channel();
                self._stream = Some(StreamClient::connect(&url, tx));
                self.ws_rx = Some(rx);
            }
            Err(e) => tracing::warn!("Sem stream de eventos: {}", e),
        }
    }

    /// Applies any server-pushed changes that arrived since the last tick.
    async fn drenar_eventos(&mut self) {
        let mut mudou = false;
        if let Some(rx) = self.ws_rx.as_mut() {
            while let Ok(event) = rx.try_recv() {
                match event {
                    WsEvent::Connected | WsEvent::Ping | WsEvent::Pong => {}
                    _ => mudou = true,
                }
            }
        }
        if mudou {
            self.recarregar().await;
        }
    }

    // --- Forms ---

    pub fn iniciar_formulario(&mut self, formulario: Formulario) {
        self.formulario = formulario;
        self.passo = 0;
        self.valores.clear();
        self.input.clear();
        self.input_mode = InputMode::Editing;
    }

    pub fn cancelar_formulario(&mut self) {
        self.formulario = Formulario::Nenhum;
        self.passo = 0;
        self.valores.clear();
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn rotulo_atual(&self) -> &'static str {
        self.formulario
            .rotulos()
            .get(self.passo)
            .copied()
            .unwrap_or("")
    }

    pub fn entrada_mascarada(&self) -> String {
        if self.formulario.campo_de_senha(self.passo) {
            "*".repeat(self.input.chars().count())
        } else {
            self.input.clone()
        }
    }

    async fn avancar_passo(&mut self) {
        let valor = self.input.trim().to_string();

        if valor.is_empty() && self.formulario.campo_obrigatorio(self.passo) {
            self.set_status("Campo obrigatório");
            return;
        }
        if !valor.is_empty()
            && self.formulario.campo_de_data(self.passo)
            && parsear_data(&valor).is_none()
        {
            self.set_status("Data inválida, use dd/mm/aaaa");
            return;
        }

        self.valores.push(valor);
        self.passo += 1;
        self.input.clear();

        if self.passo >= self.formulario.rotulos().len() {
            self.submeter_formulario().await;
        }
    }

    async fn submeter_formulario(&mut self) {
        let formulario = self.formulario;
        let valores = std::mem::take(&mut self.valores);
        self.cancelar_formulario();

        match formulario {
            Formulario::Login => {
                match self.api.login(&valores[0], &valores[1]).await {
                    Ok(()) => self.pos_login().await,
                    Err(e) => self.set_status(&format!("{e}")),
                }
            }
            Formulario::Registro => {
                match self.api.registrar(&valores[0], &valores[1]).await {
                    Ok(()) => self.pos_login().await,
                    Err(e) => self.set_status(&format!("{e}")),
                }
            }
            Formulario::NovaDisciplina => {
                let opcional = |v: &String| {
                    let v = v.trim();
                    if v.is_empty() {
                        None
                    } else {
                        Some(v.to_string())
                    }
                };
                let (Some(data_inicio), Some(data_fim)) =
                    (parsear_data(&valores[2]), parsear_data(&valores[3]))
                else {
                    self.set_status("Data inválida, use dd/mm/aaaa");
                    return;
                };
                let payload = CriarDisciplina {
                    nome: valores[0].clone(),
                    semestre: valores[1].clone(),
                    situacao: None,
                    data_inicio,
                    data_fim,
                    dia_1: opcional(&valores[4]),
                    horario_1_inicio: opcional(&valores[5]),
                    horario_1_final: opcional(&valores[6]),
                    dia_2: opcional(&valores[7]),
                    horario_2_inicio: opcional(&valores[8]),
                    horario_2_final: opcional(&valores[9]),
                };
                match self.api.create_disciplina(&payload).await {
                    Ok(_) => {
                        self.set_status("Disciplina criada");
                        self.recarregar().await;
                    }
                    Err(e) => self.set_status(&format!("Erro ao criar disciplina: {e}")),
                }
            }
            Formulario::NovaProva => {
                let procurado = normalizar(&valores[0]);
                let Some(disciplina_id) = self
                    .disciplinas
                    .iter()
                    .find(|d| normalizar(&d.nome) == procurado)
                    .map(|d| d.id)
                else {
                    self.set_status(&format!("Disciplina não encontrada: {}", valores[0]));
                    return;
                };
                let Some(data) = parsear_data(&valores[2]) else {
                    self.set_status("Data inválida, use dd/mm/aaaa");
                    return;
                };
                let payload = CriarProva {
                    disciplina_id,
                    titulo: valores[1].clone(),
                    data,
                    situacao: None,
                };
                match self.api.create_prova(&payload).await {
                    Ok(prova) => {
                        self.set_status(&format!(
                            "Prova criada para {}",
                            formatar_data(prova.data)
                        ));
                        self.recarregar().await;
                    }
                    Err(e) => self.set_status(&format!("Erro ao criar prova: {e}")),
                }
            }
            Formulario::Nenhum => {}
        }
    }

    async fn pos_login(&mut self) {
        self.conectar_stream();
        self.recarregar().await;
        self.view = View::Painel;
        self.set_status("Bem-vindo!");
    }

    // --- Key handling ---

    async fn handle_key(&mut self, key: KeyEvent) {
        if self.confirmacao.is_some() {
            match key.code {
                KeyCode::Char('s') | KeyCode::Enter => self.confirmar_exclusao().await,
                KeyCode::Char('n') | KeyCode::Esc => {
                    self.confirmacao = None;
                    self.set_status("Exclusão cancelada");
                }
                _ => {}
            }
            return;
        }

        if self.input_mode == InputMode::Editing {
            match key.code {
                KeyCode::Esc => self.cancelar_formulario(),
                KeyCode::Enter => self.avancar_passo().await,
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) => self.input.push(c),
                _ => {}
            }
            return;
        }

        match self.view {
            View::Login => self.handle_key_login(key),
            View::Painel => self.handle_key_painel(key).await,
            View::Disciplinas => self.handle_key_disciplinas(key).await,
            View::Provas => self.handle_key_provas(key).await,
        }
    }

    fn handle_key_login(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('l') | KeyCode::Enter => self.iniciar_formulario(Formulario::Login),
            KeyCode::Char('r') => self.iniciar_formulario(Formulario::Registro),
            _ => {}
        }
    }

    async fn handle_key_painel(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Tab | KeyCode::Char('d') => self.view = View::Disciplinas,
            KeyCode::Char('p') => self.view = View::Provas,
            KeyCode::Char(' ') => self.pomodoro.alternar(),
            KeyCode::Char('x') => self.pomodoro.reiniciar(),
            KeyCode::Char('s') => self.ciclar_semestre(),
            KeyCode::Char('r') => self.recarregar().await,
            _ => {}
        }
    }

    async fn handle_key_disciplinas(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Tab => self.view = View::Provas,
            KeyCode::Esc => self.view = View::Painel,
            KeyCode::Left if shift => self.mover_cartao(false).await,
            KeyCode::Right if shift => self.mover_cartao(true).await,
            KeyCode::Char('H') => self.mover_cartao(false).await,
            KeyCode::Char('L') => self.mover_cartao(true).await,
            KeyCode::Char('J') => self.reordenar(true),
            KeyCode::Char('K') => self.reordenar(false),
            KeyCode::Left | KeyCode::Char('h') => self.coluna_anterior(),
            KeyCode::Right | KeyCode::Char('l') => self.proxima_coluna(),
            KeyCode::Down | KeyCode::Char('j') => self.proximo_cartao(),
            KeyCode::Up | KeyCode::Char('k') => self.cartao_anterior(),
            KeyCode::Char('n') => self.iniciar_formulario(Formulario::NovaDisciplina),
            KeyCode::Char('d') => {
                if let Some(id) = self.cartao_selecionado().map(|c| c.id) {
                    self.confirmacao = Some(Exclusao::Disciplina(id));
                }
            }
            KeyCode::Char('s') => self.ciclar_semestre(),
            KeyCode::Char('r') => self.recarregar().await,
            _ => {}
        }
    }

    async fn handle_key_provas(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Tab | KeyCode::Esc => self.view = View::Painel,
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.provas.is_empty() {
                    self.indice_prova = (self.indice_prova + 1) % self.provas.len();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.provas.is_empty() {
                    self.indice_prova = if self.indice_prova == 0 {
                        self.provas.len() - 1
                    } else {
                        self.indice_prova - 1
                    };
                }
            }
            KeyCode::Char('n') => self.iniciar_formulario(Formulario::NovaProva),
            KeyCode::Char('m') => self.avancar_situacao_da_prova().await,
            KeyCode::Char('d') => {
                if let Some(id) = self.prova_selecionada().map(|p| p.id) {
                    self.confirmacao = Some(Exclusao::Prova(id));
                }
            }
            KeyCode::Char('r') => self.recarregar().await,
            _ => {}
        }
    }
}
