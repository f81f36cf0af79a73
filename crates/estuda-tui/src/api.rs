use reqwest::{Client, RequestBuilder};
use uuid::Uuid;

use crate::models::{
    ApiResponse, AtualizarDisciplina, AtualizarProva, Credenciais, CriarDisciplina, CriarProva,
    Disciplina, MetricasPainel, Prova, RespostaLogin,
};

/// HTTP client for the estuda server. Holds the session token after login.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// WebSocket endpoint for the change stream, with the session token attached.
    pub fn stream_ws_url(&self) -> anyhow::Result<String> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Não autenticado"))?;
        let ws_base = self
            .base_url
            .replacen("http://", "ws://", 1)
            .replacen("https://", "wss://", 1);
        Ok(format!("{}/api/stream/ws?token={}", ws_base, token))
    }

    fn autorizar(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn desembrulhar<T>(response: ApiResponse<T>) -> anyhow::Result<T> {
        if response.success {
            response
                .data
                .ok_or_else(|| anyhow::anyhow!("No data returned"))
        } else {
            anyhow::bail!(response.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }

    // Auth endpoints

    pub async fn registrar(&mut self, email: &str, senha: &str) -> anyhow::Result<()> {
        let url = format!("{}/api/auth/registrar", self.base_url);
        let payload = Credenciais {
            email: email.to_string(),
            senha: senha.to_string(),
        };
        let response: ApiResponse<RespostaLogin> =
            self.client.post(&url).json(&payload).send().await?.json().await?;

        let login = Self::desembrulhar(response)?;
        self.token = Some(login.token);
        Ok(())
    }

    pub async fn login(&mut self, email: &str, senha: &str) -> anyhow::Result<()> {
        let url = format!("{}/api/auth/login", self.base_url);
        let payload = Credenciais {
            email: email.to_string(),
            senha: senha.to_string(),
        };
        let response: ApiResponse<RespostaLogin> =
            self.client.post(&url).json(&payload).send().await?.json().await?;

        let login = Self::desembrulhar(response)?;
        self.token = Some(login.token);
        Ok(())
    }

    // Disciplina endpoints

    pub async fn list_disciplinas(&self) -> anyhow::Result<Vec<Disciplina>> {
        let url = format!("{}/api/disciplinas", self.base_url);
        let response: ApiResponse<Vec<Disciplina>> = self
            .autorizar(self.client.get(&url))
            .send()
            .await?
            .json()
            .await?;
        Self::desembrulhar(response)
    }

    pub async fn create_disciplina(&self, payload: &CriarDisciplina) -> anyhow::Result<Disciplina> {
        let url = format!("{}/api/disciplinas", self.base_url);
        let response: ApiResponse<Disciplina> = self
            .autorizar(self.client.post(&url).json(payload))
            .send()
            .await?
            .json()
            .await?;
        Self::desembrulhar(response)
    }

    pub async fn update_disciplina(
        &self,
        id: Uuid,
        payload: &AtualizarDisciplina,
    ) -> anyhow::Result<Disciplina> {
        let url = format!("{}/api/disciplinas/{}", self.base_url, id);
        let response: ApiResponse<Disciplina> = self
            .autorizar(self.client.put(&url).json(payload))
            .send()
            .await?
            .json()
            .await?;
        Self::desembrulhar(response)
    }

    pub async fn delete_disciplina(&self, id: Uuid) -> anyhow::Result<()> {
        let url = format!("{}/api/disciplinas/{}", self.base_url, id);
        let response: ApiResponse<()> = self
            .autorizar(self.client.delete(&url))
            .send()
            .await?
            .json()
            .await?;
        if response.success {
            Ok(())
        } else {
            anyhow::bail!(response.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }

    pub async fn metricas(&self) -> anyhow::Result<MetricasPainel> {
        let url = format!("{}/api/disciplinas/metricas", self.base_url);
        let response: ApiResponse<MetricasPainel> = self
            .autorizar(self.client.get(&url))
            .send()
            .await?
            .json()
            .await?;
        Self::desembrulhar(response)
    }

    // Prova endpoints

    pub async fn list_provas(&self) -> anyhow::Result<Vec<Prova>> {
        let url = format!("{}/api/provas", self.base_url);
        let response: ApiResponse<Vec<Prova>> = self
            .autorizar(self.client.get(&url))
            .send()
            .await?
            .json()
            .await?;
        Self::desembrulhar(response)
    }

    pub async fn create_prova(&self, payload: &CriarProva) -> anyhow::Result<Prova> {
        let url = format!("{}/api/provas", self.base_url);
        let response: ApiResponse<Prova> = self
            .autorizar(self.client.post(&url).json(payload))
            .send()
            .await?
            .json()
            .await?;
        Self::desembrulhar(response)
    }

    pub async fn update_prova(&self, id: Uuid, payload: &AtualizarProva) -> anyhow::Result<Prova> {
        let url = format!("{}/api/provas/{}", self.base_url, id);
        let response: ApiResponse<Prova> = self
            .autorizar(self.client.put(&url).json(payload))
            .send()
            .await?
            .json()
            .await?;
        Self::desembrulhar(response)
    }

    pub async fn delete_prova(&self, id: Uuid) -> anyhow::Result<()> {
        let url = format!("{}/api/provas/{}", self.base_url, id);
        let response: ApiResponse<()> = self
            .autorizar(self.client.delete(&url))
            .send()
            .await?
            .json()
            .await?;
        if response.success {
            Ok(())
        } else {
            anyhow::bail!(response.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_ws_url() {
        let mut api = ApiClient::new("http://localhost:3000/");
        assert!(api.stream_ws_url().is_err());

        api.token = Some("abc".to_string());
        assert_eq!(
            api.stream_ws_url().unwrap(),
            "ws://localhost:3000/api/stream/ws?token=abc"
        );
    }
}
