/// Sent to clients in the initialize result. Keep it short: it ends up in
/// every conversation's context.
pub const INSTRUCTIONS: &str = "Zerops

PaaS running full Linux containers (Incus) on bare metal, with SSH access. Not serverless.

Services
Runtime: nodejs php python go rust java dotnet elixir gleam bun deno
Container: alpine ubuntu docker (VM-based)
DB: postgresql (default) mariadb clickhouse
Cache: valkey (default, redis-compatible) | keydb (deprecated)
Search: meilisearch (default) elasticsearch typesense qdrant (internal only)
Queue: nats (default) kafka
Storage: object-storage (S3/MinIO) shared-storage (POSIX)
Web: nginx static (SPA-ready)

Files
zerops.yml: build, deploy and run config per service
import.yml: infrastructure as code (services array, no project: section)

Rules
- Internal networking uses http://, never https:// (SSL terminates at the L7 balancer)
- Ports 10-65435 only
- HA mode cannot be changed after creation
- prepareCommands are cached; initCommands run on every start
- Env var cross-references: ${service_hostname} (underscore, not dash)
- Cloudflare must use \"Full (strict)\" SSL mode
- No localhost: services reach each other by hostname

Tools
zerops_discover: project info and service list (call first)
zerops_logs: runtime and build logs
zerops_validate: check zerops.yml or import.yml before deploying
zerops_knowledge: keyword search over the docs (read hits via zerops://docs/)
zerops_manage: start, stop, restart, scale (async)
zerops_env: get, set, delete env vars (set/delete are async)
zerops_import: create services from import.yml (async)
zerops_delete: remove a service (requires confirm)
zerops_subdomain: enable or disable the zerops.app subdomain
zerops_deploy: push code with zcli
zerops_process: poll or cancel async processes until FINISHED, FAILED or CANCELED

Defaults unless the user says otherwise
postgresql@16, valkey@8, meilisearch@1, nats, alpine base, NON_HA, SHARED CPU";
